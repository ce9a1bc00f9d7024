//! Per-serving scaling and bar widths normalized to catalog-wide maxima.

use serde::Serialize;

use crate::core::FoodRecord;
use crate::scoring::weighted_score;

/// Convert a per-100g value to a per-serving value.
///
/// Returns 0 when either operand is zero or not finite. Negative operands
/// scale like any other number.
pub fn scale_by_serving(value: f64, serving_grams: f64) -> f64 {
    if is_absent(value) || is_absent(serving_grams) {
        return 0.0;
    }
    value * serving_grams / 100.0
}

fn is_absent(value: f64) -> bool {
    value == 0.0 || !value.is_finite()
}

/// Width of a bar as a percentage of `max_value`.
///
/// A zero or non-finite maximum (empty catalog) yields 0 instead of NaN.
pub fn relative_bar_width(value: f64, max_value: f64) -> f64 {
    if !is_positive(max_value) || !value.is_finite() {
        return 0.0;
    }
    value / max_value * 100.0
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Total purines in one serving of the record
pub fn serving_purines(record: &FoodRecord) -> f64 {
    scale_by_serving(record.total_purines(), record.serving_grams())
}

/// Catalog-wide maxima used to keep bar widths comparable across views
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GlobalScale {
    pub max_total_purine: f64,
    pub max_weighted_score: f64,
    pub max_serving_purine: f64,
}

impl GlobalScale {
    /// Compute maxima over the whole dataset. All zero for an empty slice.
    pub fn from_records(records: &[FoodRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, record| Self {
            max_total_purine: acc.max_total_purine.max(record.total_purines()),
            max_weighted_score: acc.max_weighted_score.max(weighted_score(record)),
            max_serving_purine: acc.max_serving_purine.max(serving_purines(record)),
        })
    }
}
