use anyhow::Result;
use std::path::Path;

use cutter_core::config::CutterConfig;

pub fn run(base_dir: &Path) -> Result<()> {
    let config_path = CutterConfig::default_path(base_dir);
    let config = match CutterConfig::load(&config_path) {
        Ok(config) => {
            println!("Config: {}", config_path.display());
            config
        }
        Err(cutter_core::CutterError::ConfigNotFound(_)) => {
            println!("No config at {}, using defaults", config_path.display());
            println!("Run `cutter init` to create one.");
            CutterConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    println!();
    println!("  Default chunks: {}", config.cutter.default_chunks);
    println!("  Buffer size:    {} bytes", config.cutter.buffer_size);
    println!("  Output dir:     {}", config.output_dir().display());

    Ok(())
}
