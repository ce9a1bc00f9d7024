//! Shared error types for the library

use std::path::PathBuf;
use thiserror::Error;

use crate::selection::PinError;

/// Main error type for purindb operations
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset could not be read or decoded. Fatal for the session.
    #[error("Failed to load dataset from {}: {message}", path.display())]
    DatasetLoad { path: PathBuf, message: String },

    /// Application configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Settings store errors
    #[error("Settings error: {0}")]
    Settings(String),

    /// A threshold triple that is not finite or not strictly ascending
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),

    /// Index outside the loaded dataset
    #[error("No food with index {0}")]
    UnknownFood(usize),

    /// Category not present in the dataset
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Pin set rejected a change
    #[error(transparent)]
    Pin(#[from] PinError),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Config file that is not valid TOML for the config schema
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a dataset load error for a path
    pub fn dataset_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DatasetLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
