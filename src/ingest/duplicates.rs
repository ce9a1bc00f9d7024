//! Fuzzy duplicate detection between imported and existing foods.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use similar::{DiffTag, TextDiff};

use crate::core::FoodRecord;

/// Names at least this similar are duplicates regardless of purine values
pub const STRONG_SIMILARITY: f64 = 0.85;
/// Names at least this similar are duplicates when totals are close
pub const WEAK_SIMILARITY: f64 = 0.6;
/// Relative total-purine difference counted as close
pub const TOTAL_TOLERANCE: f64 = 0.05;

static NON_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zæøå]").unwrap());

/// Lowercase and keep only the letters a-z, æ, ø and å
pub fn normalize_name(name: &str) -> String {
    NON_LETTER.replace_all(&name.to_lowercase(), "").into_owned()
}

/// Character-level similarity ratio of two normalized names, 0.0-1.0.
///
/// `2 * matched / (len_a + len_b)`, computed in f64 so an exact boundary
/// ratio compares equal to the thresholds. Two empty names are identical.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    let a = normalize_name(a);
    let b = normalize_name(b);
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }
    let diff = TextDiff::from_chars(a.as_str(), b.as_str());
    let matched: usize = diff
        .ops()
        .iter()
        .map(|op| op.as_tag_tuple())
        .filter(|(tag, _, _)| *tag == DiffTag::Equal)
        .map(|(_, old, _)| old.len())
        .sum();
    2.0 * matched as f64 / total as f64
}

/// Relative difference of an imported total against an existing one.
/// An existing total of 0 never counts as close.
pub fn total_difference(imported: f64, existing: f64) -> f64 {
    if existing > 0.0 {
        (imported - existing).abs() / existing
    } else {
        1.0
    }
}

/// An imported row matched to an existing record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateMatch {
    pub imported_name: String,
    pub existing_name: String,
    pub imported_total: f64,
    pub existing_total: f64,
    pub similarity: f64,
}

/// First existing record `candidate` duplicates, if any
pub fn find_duplicate<'a>(
    candidate: &FoodRecord,
    existing: &'a [FoodRecord],
) -> Option<(&'a FoodRecord, f64)> {
    existing.iter().find_map(|record| {
        let similarity = name_similarity(&candidate.name, &record.name);
        let close_totals =
            total_difference(candidate.total_purines(), record.total_purines()) < TOTAL_TOLERANCE;
        let duplicate = similarity > STRONG_SIMILARITY
            || (similarity > WEAK_SIMILARITY && close_totals);
        duplicate.then_some((record, similarity))
    })
}
