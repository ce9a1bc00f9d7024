// Shared fixtures for purindb integration tests
#![allow(dead_code)]

use indoc::indoc;
use std::fs;
use std::path::{Path, PathBuf};

use purindb::config::{MemoryStore, SettingsManager, TaxonomyConfig};
use purindb::dataset::{Catalog, JsonFileProvider};
use purindb::view::Browser;

/// Five foods across four categories.
///
/// | id | name     | category | total | serving | weighted |
/// |----|----------|----------|-------|---------|----------|
/// | 0  | Banan    | Frukt    | 57    | 120     | 24.7     |
/// | 1  | Kylling  | Fjærfe   | 175   | 150     | 109.5    |
/// | 2  | Andunge  | Fjærfe   | 140   | 200     | 132      |
/// | 3  | Pils øl  | Alkohol  | 12    | 330*    | 7.2      |
/// | 4  | Sardiner | Fisk     | 480   | 90      | 323      |
///
/// *patched to 500g by the serving override when loaded from disk
pub const FOODS_JSON: &str = indoc! {r#"
    [
      {"name": "Banan", "category": "Frukt", "serving": 120, "total_purines": 57,
       "hypoxanthine": 10, "adenine": 20, "guanine": 15, "xanthine": 12},
      {"name": "Kylling", "category": "Fjærfe", "serving": 150, "total_purines": 175,
       "hypoxanthine": 80, "adenine": 40, "guanine": 50, "xanthine": 5},
      {"name": "Andunge", "category": "Fjærfe", "serving": 200, "total_purines": 140,
       "hypoxanthine": 100, "adenine": 50, "guanine": 10, "xanthine": 10},
      {"name": "Pils øl", "category": "Alkohol", "serving": 330, "total_purines": 12,
       "hypoxanthine": 5, "adenine": 3, "guanine": 2, "xanthine": 2},
      {"name": "Sardiner", "category": "Fisk", "serving": 90, "total_purines": 480,
       "hypoxanthine": 250, "adenine": 100, "guanine": 120, "xanthine": 10}
    ]
"#};

pub const TRANSLATIONS_JSON: &str = indoc! {r#"
    {
      "app": {"title": "Purinoversikt"},
      "search.placeholder": "Søk etter matvare"
    }
"#};

pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Catalog loaded through the file provider, so the serving override applies
pub fn load_catalog(dir: &Path) -> Catalog {
    let data = write_fixture(dir, "purine_data.json", FOODS_JSON);
    let translations = write_fixture(dir, "translations.json", TRANSLATIONS_JSON);
    let provider = JsonFileProvider::new(data).with_translations(translations);
    Catalog::load(&provider).unwrap()
}

pub fn browser_with(dir: &Path, store: MemoryStore) -> Browser<MemoryStore> {
    Browser::new(
        load_catalog(dir),
        &TaxonomyConfig::default(),
        SettingsManager::load(store),
    )
}
