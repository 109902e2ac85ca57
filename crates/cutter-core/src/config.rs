use crate::error::{CutterError, Result};
use crate::join::DEFAULT_BUFFER_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration stored as TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CutterConfig {
    #[serde(default)]
    pub cutter: CutterSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutterSettings {
    /// Chunk count used when none is given on the command line.
    #[serde(default = "default_chunks")]
    pub default_chunks: u32,
    /// Block size used when copying chunk payloads during a join.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
    /// Folder for cut/join output; the current directory when unset.
    #[serde(default)]
    pub output_dir: Option<String>,
}

impl Default for CutterSettings {
    fn default() -> Self {
        Self {
            default_chunks: default_chunks(),
            buffer_size: default_buffer_size(),
            output_dir: None,
        }
    }
}

fn default_chunks() -> u32 {
    2
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

impl CutterConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CutterError::ConfigNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| CutterError::TomlDe(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(CutterError::ConfigNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Save config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CutterError::TomlSer(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cutter.default_chunks < 2 {
            return Err(CutterError::Config(format!(
                "default_chunks must be at least 2, got {}",
                self.cutter.default_chunks
            )));
        }
        if self.cutter.buffer_size == 0 {
            return Err(CutterError::Config("buffer_size must not be 0".to_string()));
        }
        Ok(())
    }

    /// Output folder to use when none is given on the command line.
    pub fn output_dir(&self) -> PathBuf {
        self.cutter
            .output_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the config file path: `<base_dir>/cutter.toml`
    pub fn default_path(base_dir: &Path) -> PathBuf {
        base_dir.join("cutter.toml")
    }

    /// Resolve the default config directory: `~/.cutter`
    pub fn default_base_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|h| h.join(".cutter"))
            .ok_or_else(|| CutterError::Config("Cannot determine home directory".to_string()))
    }
}
