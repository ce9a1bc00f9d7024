use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::{default_config_toml, CONFIG_FILE_NAME};

/// Write a commented default `.purindb.toml` into `dir`
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, default_config_toml())?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}
