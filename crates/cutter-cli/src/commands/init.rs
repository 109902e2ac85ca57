use anyhow::Result;
use std::path::Path;

use cutter_core::config::CutterConfig;

pub fn run(base_dir: &Path) -> Result<()> {
    println!("Initializing cutter in {}", base_dir.display());

    let config_path = CutterConfig::default_path(base_dir);
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
    } else {
        CutterConfig::default().save(&config_path)?;
        println!("Created config: {}", config_path.display());
    }

    Ok(())
}
