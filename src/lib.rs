// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dataset;
pub mod formatting;
pub mod ingest;
pub mod output;
pub mod query;
pub mod scaling;
pub mod scoring;
pub mod selection;
pub mod taxonomy;
pub mod view;

// Re-export commonly used types
pub use crate::core::{Compound, Error, FoodId, FoodRecord, Result};

pub use crate::scoring::{
    assess_record, risk_level, risk_score, weighted_score, ColorThresholds, Level, RiskAssessment,
    ThresholdScheme, RISK_DIVISOR,
};

pub use crate::scaling::{relative_bar_width, scale_by_serving, serving_purines, GlobalScale};

pub use crate::taxonomy::{build_taxonomy, CategoryEntry, Taxonomy};

pub use crate::query::{
    filter_by_category, rank, search, sort_results, AnnotatedFood, Annotator, SearchOutcome,
};

pub use crate::selection::{PinError, PinSet, PinToggle, PIN_CAPACITY};

pub use crate::view::{
    Browser, FoodDetail, Screen, ScreenContent, ScreenView, SearchResults, SortMode, ViewState,
};

pub use crate::config::{
    AppConfig, JsonFileStore, MemoryStore, Settings, SettingsManager, SettingsStore,
};

pub use crate::dataset::{Catalog, DatasetBundle, DatasetProvider, JsonFileProvider};
