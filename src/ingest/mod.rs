//! Merge a purine CSV export into the JSON dataset.
//!
//! Imported rows are categorized by keyword, compared against the existing
//! records and appended only when they are not fuzzy duplicates. Existing
//! records always win.

pub mod categorize;
pub mod csv_import;
pub mod duplicates;
pub mod report;

pub use categorize::{categorize_food, FALLBACK_CATEGORY};
pub use csv_import::{parse_amount, read_csv, read_csv_path};
pub use duplicates::{find_duplicate, name_similarity, normalize_name, DuplicateMatch};
pub use report::render_report;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, info_span};

use crate::core::{Error, FoodRecord, Result, ResultExt};
use crate::dataset::parse_records;

/// Result of merging imported records into an existing dataset
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// Existing records first, then the new ones in import order
    pub merged: Vec<FoodRecord>,
    pub duplicates: Vec<DuplicateMatch>,
    pub new_entries: Vec<FoodRecord>,
    pub imported_count: usize,
}

/// Split `imported` into duplicates and new entries and build the merged list
pub fn merge(existing: Vec<FoodRecord>, imported: Vec<FoodRecord>) -> MergeOutcome {
    let imported_count = imported.len();
    let mut duplicates = Vec::new();
    let mut new_entries = Vec::new();

    for candidate in imported {
        match find_duplicate(&candidate, &existing) {
            Some((matched, similarity)) => duplicates.push(DuplicateMatch {
                imported_name: candidate.name.clone(),
                existing_name: matched.name.clone(),
                imported_total: candidate.total_purines(),
                existing_total: matched.total_purines(),
                similarity,
            }),
            None => new_entries.push(candidate),
        }
    }

    let mut merged = existing;
    merged.extend(new_entries.iter().cloned());

    MergeOutcome {
        merged,
        duplicates,
        new_entries,
        imported_count,
    }
}

/// Files involved in a merge run
#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub csv: PathBuf,
    pub data: PathBuf,
    /// Where to write the text report, if anywhere
    pub report: Option<PathBuf>,
}

/// Merge a CSV file into the dataset file in place.
///
/// The original dataset is copied to `<data>.backup` before it is
/// overwritten.
pub fn merge_files(options: &MergeOptions) -> Result<MergeOutcome> {
    let span = info_span!("merge", csv = %options.csv.display(), data = %options.data.display());
    let _guard = span.enter();

    let contents = fs::read_to_string(&options.data)
        .map_err(|e| Error::dataset_load(&options.data, e.to_string()))?;
    let existing =
        parse_records(&contents).map_err(|e| Error::dataset_load(&options.data, e.to_string()))?;
    let imported = read_csv_path(&options.csv)?;

    let outcome = merge(existing, imported);
    info!(
        duplicates = outcome.duplicates.len(),
        added = outcome.new_entries.len(),
        total = outcome.merged.len(),
        "Merged CSV into dataset"
    );

    let backup = backup_path(&options.data);
    fs::copy(&options.data, &backup)
        .map_err(Error::from)
        .context(format!("Backing up to {}", backup.display()))?;
    fs::write(&options.data, serde_json::to_string_pretty(&outcome.merged)?)
        .map_err(Error::from)
        .context(format!("Writing {}", options.data.display()))?;

    if let Some(report_path) = &options.report {
        fs::write(report_path, render_report(&outcome, chrono::Local::now()))
            .map_err(Error::from)
            .context(format!("Writing {}", report_path.display()))?;
    }

    Ok(outcome)
}

/// `<data>.backup` next to the dataset
pub fn backup_path(data: &Path) -> PathBuf {
    let mut name = data.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}
