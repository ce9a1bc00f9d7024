//! Dataset loading and the immutable food catalog.
//!
//! A [`DatasetProvider`] yields the raw records and translation table once
//! at startup. [`Catalog`] wraps them with the catalog-wide [`GlobalScale`]
//! and addresses records by their stable index.

use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

use crate::config::{DatasetConfig, ServingOverride};
use crate::core::{Error, FoodId, FoodRecord, Result};
use crate::scaling::GlobalScale;

/// Records plus the translation table, as loaded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetBundle {
    pub records: Vec<FoodRecord>,
    pub translations: HashMap<String, String>,
}

/// Source of the dataset. Loading happens once; failure is fatal.
pub trait DatasetProvider {
    fn load(&self) -> Result<DatasetBundle>;
}

/// Reads `purine_data.json` and `translations.json` style files
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    data_path: PathBuf,
    translations_path: Option<PathBuf>,
    serving_override: ServingOverride,
}

impl JsonFileProvider {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            translations_path: None,
            serving_override: ServingOverride::default(),
        }
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        Self {
            data_path: config.data.clone(),
            translations_path: config.translations.clone(),
            serving_override: config.serving_override.clone(),
        }
    }

    pub fn with_translations(mut self, path: impl Into<PathBuf>) -> Self {
        self.translations_path = Some(path.into());
        self
    }

    pub fn with_serving_override(mut self, serving_override: ServingOverride) -> Self {
        self.serving_override = serving_override;
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}

impl DatasetProvider for JsonFileProvider {
    fn load(&self) -> Result<DatasetBundle> {
        let span = info_span!("dataset_load", data = %self.data_path.display());
        let _guard = span.enter();

        // Both files are independent; read them side by side and join.
        let (records, translations) = rayon::join(
            || read_records(&self.data_path),
            || match &self.translations_path {
                Some(path) => read_translations(path),
                None => Ok(HashMap::new()),
            },
        );
        let mut records = records?;
        let translations = translations?;

        let patched = apply_serving_override(&mut records, &self.serving_override);
        info!(
            foods = records.len(),
            translations = translations.len(),
            patched_servings = patched,
            "Dataset loaded"
        );

        Ok(DatasetBundle {
            records,
            translations,
        })
    }
}

fn read_records(path: &Path) -> Result<Vec<FoodRecord>> {
    let contents =
        fs::read_to_string(path).map_err(|e| Error::dataset_load(path, e.to_string()))?;
    parse_records(&contents).map_err(|e| Error::dataset_load(path, e.to_string()))
}

/// Parse the dataset document: a JSON array of food objects
pub fn parse_records(contents: &str) -> Result<Vec<FoodRecord>> {
    Ok(serde_json::from_str(contents)?)
}

fn read_translations(path: &Path) -> Result<HashMap<String, String>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No translations file");
            return Ok(HashMap::new());
        }
        Err(e) => return Err(Error::dataset_load(path, e.to_string())),
    };
    parse_translations(&contents).map_err(|e| Error::dataset_load(path, e.to_string()))
}

/// Parse a translation document. Nested objects are flattened into dotted
/// keys; non-string leaves are skipped.
pub fn parse_translations(contents: &str) -> Result<HashMap<String, String>> {
    let document: Value = serde_json::from_str(contents)?;
    let mut table = HashMap::new();
    flatten_into(&mut table, String::new(), &document);
    Ok(table)
}

fn flatten_into(table: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::String(text) if !prefix.is_empty() => {
            table.insert(prefix, text.clone());
        }
        Value::Object(entries) => {
            for (key, child) in entries {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(table, path, child);
            }
        }
        _ => {}
    }
}

/// Force the serving of every record whose lowercased name contains the
/// override token. Returns how many records were patched.
pub fn apply_serving_override(records: &mut [FoodRecord], rule: &ServingOverride) -> usize {
    let token = rule.token.to_lowercase();
    if token.is_empty() {
        return 0;
    }
    let mut patched = 0;
    for record in records
        .iter_mut()
        .filter(|record| record.name.to_lowercase().contains(&token))
    {
        record.serving = Some(rule.grams);
        patched += 1;
    }
    patched
}

/// The loaded, immutable catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<FoodRecord>,
    translations: HashMap<String, String>,
    scale: GlobalScale,
}

impl Catalog {
    pub fn new(bundle: DatasetBundle) -> Self {
        let scale = GlobalScale::from_records(&bundle.records);
        Self {
            records: bundle.records,
            translations: bundle.translations,
            scale,
        }
    }

    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        Self::new(DatasetBundle {
            records,
            translations: HashMap::new(),
        })
    }

    pub fn load(provider: &dyn DatasetProvider) -> Result<Self> {
        Ok(Self::new(provider.load()?))
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn get(&self, id: FoodId) -> Option<&FoodRecord> {
        self.records.get(id)
    }

    /// Like [`Catalog::get`] but an unknown id is an error
    pub fn require(&self, id: FoodId) -> Result<&FoodRecord> {
        self.get(id).ok_or(Error::UnknownFood(id))
    }

    pub fn scale(&self) -> &GlobalScale {
        &self.scale
    }

    /// Translation of `key`, or the key itself when there is none
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn beer_and_bread() -> Vec<FoodRecord> {
        let mut beer = FoodRecord::new("Pils øl", "Alkohol");
        beer.serving = Some(330.0);
        beer.total_purines = Some(120.0);
        let mut bread = FoodRecord::new("Brød", "Korn");
        bread.serving = Some(40.0);
        vec![beer, bread]
    }

    #[test]
    fn test_serving_override_patches_matching_names() {
        let mut records = beer_and_bread();
        let patched = apply_serving_override(&mut records, &ServingOverride::default());
        assert_eq!(patched, 1);
        assert_eq!(records[0].serving, Some(500.0));
        assert_eq!(records[1].serving, Some(40.0));
    }

    #[test]
    fn test_serving_override_matches_case_insensitively() {
        let mut records = vec![FoodRecord::new("ØL, mørk", "Alkohol")];
        apply_serving_override(&mut records, &ServingOverride::default());
        assert_eq!(records[0].serving, Some(500.0));
    }

    #[test]
    fn test_parse_records_missing_numbers() {
        let records = parse_records(r#"[{"name": "Eple", "category": "Frukt"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total_purines(), 0.0);
        assert_eq!(records[0].preparation, None);
    }

    #[test]
    fn test_parse_translations_flattens() {
        let table =
            parse_translations(r#"{"home": {"title": "Purin"}, "search": "Søk", "n": 3}"#).unwrap();
        assert_eq!(table.get("home.title").map(String::as_str), Some("Purin"));
        assert_eq!(table.get("search").map(String::as_str), Some("Søk"));
        assert!(!table.contains_key("n"));
    }

    #[test]
    fn test_provider_loads_without_translations_file() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("purine_data.json");
        fs::write(
            &data,
            r#"[{"name": "Lettøl", "category": "Alkohol", "serving": 330, "total_purines": 10}]"#,
        )
        .unwrap();
        let provider =
            JsonFileProvider::new(&data).with_translations(dir.path().join("translations.json"));
        let bundle = provider.load().unwrap();
        assert_eq!(bundle.records[0].serving, Some(500.0));
        assert!(bundle.translations.is_empty());
    }

    #[test]
    fn test_provider_reports_missing_data_file() {
        let dir = TempDir::new().unwrap();
        let err = JsonFileProvider::new(dir.path().join("nope.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::DatasetLoad { .. }));
    }

    #[test]
    fn test_provider_reports_malformed_data() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("purine_data.json");
        fs::write(&data, "{\"name\": 1}").unwrap();
        let err = JsonFileProvider::new(&data).load().unwrap_err();
        assert!(err.to_string().contains("Failed to load dataset"));
    }

    #[test]
    fn test_catalog_scale_and_translate() {
        let mut bundle = DatasetBundle {
            records: beer_and_bread(),
            translations: HashMap::new(),
        };
        bundle
            .translations
            .insert("Alkohol".to_string(), "Alcohol".to_string());
        let catalog = Catalog::new(bundle);
        assert_eq!(catalog.scale().max_total_purine, 120.0);
        assert_eq!(catalog.translate("Alkohol"), "Alcohol");
        assert_eq!(catalog.translate("Korn"), "Korn");
        assert!(matches!(catalog.require(9), Err(Error::UnknownFood(9))));
    }
}
