use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration (`.purindb.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the dataset lives and how it is patched on load
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Category ordering
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_data_path")]
    pub data: PathBuf,

    /// Optional translation table; a missing file yields an empty table
    #[serde(default = "default_translations_path")]
    pub translations: Option<PathBuf>,

    #[serde(default)]
    pub serving_override: ServingOverride,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data: default_data_path(),
            translations: default_translations_path(),
            serving_override: ServingOverride::default(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("purine_data.json")
}

fn default_translations_path() -> Option<PathBuf> {
    Some(PathBuf::from("translations.json"))
}

/// One-time load patch: records whose lowercased name contains `token`
/// get their serving forced to `grams`. The default targets beer ("øl").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingOverride {
    #[serde(default = "default_override_token")]
    pub token: String,

    #[serde(default = "default_override_grams")]
    pub grams: f64,
}

impl Default for ServingOverride {
    fn default() -> Self {
        Self {
            token: default_override_token(),
            grams: default_override_grams(),
        }
    }
}

fn default_override_token() -> String {
    "øl".to_string()
}

fn default_override_grams() -> f64 {
    500.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Categories listed first, in this order, when present
    #[serde(default = "default_priority")]
    pub priority: Vec<String>,

    /// Category always listed last when present
    #[serde(default = "default_forced_last")]
    pub forced_last: Option<String>,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            priority: default_priority(),
            forced_last: default_forced_last(),
        }
    }
}

fn default_priority() -> Vec<String> {
    [
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
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_forced_last() -> Option<String> {
    Some("Alkohol".to_string())
}
