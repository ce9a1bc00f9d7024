//! Key/value persistence for user settings.
//!
//! Settings are a flat JSON object. Stores only move raw JSON values;
//! decoding, defaults and migrations live in [`super::settings`].

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Error, Result};

/// Persistent get/set of settings keys
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a value and persist it
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Remove every key and persist the empty document
    fn clear(&mut self) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Map<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from a JSON object
    pub fn from_json(document: Value) -> Self {
        match document {
            Value::Object(values) => Self { values },
            _ => Self::default(),
        }
    }

    pub fn as_json(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.values.clear();
        Ok(())
    }
}

/// Store backed by a JSON file, rewritten on every change
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Open a store at `path`.
    ///
    /// A missing file starts empty. A file that is not a JSON object also
    /// starts empty (with a warning) so a corrupted file never blocks startup;
    /// it is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => parse_document(&path, &contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                log::warn!("Failed to read settings {}: {}", path.display(), e);
                Map::new()
            }
        };
        Self { path, values }
    }

    /// Open the store at the default per-user location
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(default_settings_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

fn parse_document(path: &Path, contents: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(contents) {
        Ok(Value::Object(values)) => values,
        Ok(_) => {
            log::warn!(
                "Settings file {} is not a JSON object. Using defaults.",
                path.display()
            );
            Map::new()
        }
        Err(e) => {
            log::warn!(
                "Failed to parse settings {}: {}. Using defaults.",
                path.display(),
                e
            );
            Map::new()
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.persist()
    }

    fn clear(&mut self) -> Result<()> {
        self.values.clear();
        self.persist()
    }
}

/// `<config dir>/purindb/settings.json`
pub fn default_settings_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("purindb").join("settings.json"))
        .ok_or_else(|| Error::Settings("could not determine the user config directory".into()))
}
