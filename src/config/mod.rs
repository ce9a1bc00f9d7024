//! Configuration.
//!
//! Two layers:
//! - [`AppConfig`]: static deployment settings read from `.purindb.toml`
//!   (dataset location, serving override, category ordering).
//! - [`Settings`]: user preferences persisted through a [`SettingsStore`]
//!   (sort modes and color thresholds).

mod core;
mod loader;
pub mod settings;
pub mod store;

pub use core::{AppConfig, DatasetConfig, ServingOverride, TaxonomyConfig};
pub use loader::{
    default_config_toml, directory_ancestors, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use settings::{Settings, SettingsManager, DETAIL_VIEW_MODE_KEY, SEARCH_SORT_MODE_KEY};
pub use store::{default_settings_path, JsonFileStore, MemoryStore, SettingsStore};
