//! CLI command implementations.
//!
//! - **browse**: search, categories, category and show screens
//! - **settings**: inspect and change persisted settings
//! - **merge**: import a CSV export into the dataset
//! - **init**: write a default `.purindb.toml`

pub mod browse;
pub mod init;
pub mod merge;
pub mod settings;

use anyhow::{Context, Result};

use crate::cli::GlobalArgs;
use crate::config::{load_config, load_config_from, AppConfig, JsonFileStore, SettingsManager};
use crate::dataset::{Catalog, JsonFileProvider};
use crate::view::Browser;

/// Config file from `--config`, else discovered from the working directory.
/// `--data` replaces the dataset path.
pub fn resolve_config(global: &GlobalArgs) -> Result<AppConfig> {
    let mut config = match &global.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Loading config {}", path.display()))?,
        None => load_config(),
    };
    if let Some(data) = &global.data {
        config.dataset.data = data.clone();
    }
    Ok(config)
}

pub fn open_settings(global: &GlobalArgs) -> Result<SettingsManager<JsonFileStore>> {
    let store = match &global.settings {
        Some(path) => JsonFileStore::open(path),
        None => JsonFileStore::open_default()?,
    };
    Ok(SettingsManager::load(store))
}

/// Load the dataset and settings into a browser session
pub fn open_browser(global: &GlobalArgs) -> Result<Browser<JsonFileStore>> {
    let config = resolve_config(global)?;
    let catalog = Catalog::load(&JsonFileProvider::from_config(&config.dataset))?;
    let settings = open_settings(global)?;
    Ok(Browser::new(catalog, &config.taxonomy, settings))
}
