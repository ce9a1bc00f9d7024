use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::AppConfig;
use crate::core::{Error, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".purindb.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read a config file into a string
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<AppConfig> {
    let mut config = toml::from_str::<AppConfig>(contents)?;

    let grams = config.dataset.serving_override.grams;
    if !grams.is_finite() || grams <= 0.0 {
        return Err(Error::Configuration(format!(
            "serving_override.grams must be positive, got {}",
            grams
        )));
    }

    let token = config.dataset.serving_override.token.trim().to_lowercase();
    config.dataset.serving_override.token = token;

    Ok(config)
}

/// Try loading config from a specific path; `None` when absent or invalid
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AppConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config.with_paths_relative_to(config_path.parent()))
        }
        Err(e) => {
            log::warn!("{}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load an explicit config file. Unlike discovery, failures are reported.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let contents = read_config_file(path)?;
    Ok(parse_and_validate_config(&contents)?.with_paths_relative_to(path.parent()))
}

/// Find `.purindb.toml` in the working directory or an ancestor, else defaults
pub fn load_config() -> AppConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return AppConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AppConfig::default()
        })
}

impl AppConfig {
    /// Resolve relative dataset paths against the directory of the config file
    pub fn with_paths_relative_to(mut self, base: Option<&Path>) -> Self {
        let Some(base) = base.filter(|b| !b.as_os_str().is_empty()) else {
            return self;
        };
        if self.dataset.data.is_relative() {
            self.dataset.data = base.join(&self.dataset.data);
        }
        if let Some(translations) = self.dataset.translations.take() {
            self.dataset.translations = Some(if translations.is_relative() {
                base.join(translations)
            } else {
                translations
            });
        }
        self
    }
}

/// Commented default config written by `purindb init`
pub fn default_config_toml() -> &'static str {
    r#"# purindb configuration

[dataset]
data = "purine_data.json"
translations = "translations.json"

# Records whose name contains the token get this serving size (grams)
[dataset.serving_override]
token = "øl"
grams = 500

[taxonomy]
# Listed first, in this order, when present in the dataset
priority = [
    "Fisk",
    "Skalldyr",
    "Fjærfe",
    "Okse - Kjøtt",
    "Svin - Kjøtt",
    "Lam",
    "Bearbeidet kjøtt",
    "Innmat",
    "Grønnsaker",
    "Belgfrukter",
    "Frukt",
    "Meieri",
    "Korn",
]
# Always listed last
forced_last = "Alkohol"
"#
}
