//! Weighted uricogenic score and risk classification.
//!
//! The weighted score is a fixed linear combination of the four purine
//! bases. Dividing it by [`RISK_DIVISOR`] gives a risk score on roughly a
//! 0-1 scale, which is bucketed into a [`RiskAssessment`]. Only the bucket
//! boundaries are configurable; the score itself never is.

pub mod levels;

use serde::Serialize;

use crate::core::{Compound, FoodRecord};
pub use levels::{ColorThresholds, Level, ThresholdScheme};

/// Divisor that maps the weighted score onto the normalized risk scale
pub const RISK_DIVISOR: f64 = 300.0;

/// 1.0·H + 0.6·A + 0.1·G + 0.1·X, missing amounts count as 0
pub fn weighted_score(record: &FoodRecord) -> f64 {
    Compound::all()
        .iter()
        .map(|compound| compound.weight() * record.compound(*compound))
        .sum()
}

pub fn risk_score(weighted_score: f64) -> f64 {
    weighted_score / RISK_DIVISOR
}

/// Bucketed risk with its user-facing wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub level: Level,
    pub label: &'static str,
    pub description: &'static str,
}

impl RiskAssessment {
    pub fn from_level(level: Level) -> Self {
        let (label, description) = match level {
            Level::Low => ("Low risk", "Safe at normal intake"),
            Level::Moderate => ("Moderate risk", "Limit frequency"),
            Level::High => ("High risk", "Reduce portions"),
            Level::VeryHigh => ("Very high risk", "Avoid with gout"),
        };
        Self {
            level,
            label,
            description,
        }
    }
}

/// Classify a normalized risk score against normalized cutoffs
/// (default [`ColorThresholds::NORMALIZED_RISK`]).
pub fn risk_level(risk_score: f64, thresholds: &ColorThresholds) -> RiskAssessment {
    RiskAssessment::from_level(thresholds.classify(risk_score))
}

/// Risk assessment of a record using cutoffs stored on the weighted-score
/// scale (the canonical persisted form, default 60/120/180).
pub fn assess_record(record: &FoodRecord, weighted_thresholds: &ColorThresholds) -> RiskAssessment {
    let normalized = weighted_thresholds.scaled_down(RISK_DIVISOR);
    risk_level(risk_score(weighted_score(record)), &normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(h: f64, a: f64, g: f64, x: f64) -> FoodRecord {
        let mut r = FoodRecord::new("Test", "Test");
        r.hypoxanthine = Some(h);
        r.adenine = Some(a);
        r.guanine = Some(g);
        r.xanthine = Some(x);
        r
    }

    #[test]
    fn test_weighted_score_example() {
        let r = record(100.0, 50.0, 10.0, 10.0);
        let score = weighted_score(&r);
        assert!((score - 132.0).abs() < 1e-9);
        assert!((risk_score(score) - 0.44).abs() < 1e-9);
        let risk = risk_level(risk_score(score), &ColorThresholds::NORMALIZED_RISK);
        assert_eq!(risk.level, Level::High);
        assert_eq!(risk.label, "High risk");
    }

    #[test]
    fn test_weighted_score_missing_components() {
        let mut r = FoodRecord::new("Test", "Test");
        r.adenine = Some(10.0);
        assert!((weighted_score(&r) - 6.0).abs() < 1e-9);
        assert_eq!(weighted_score(&FoodRecord::new("Empty", "Test")), 0.0);
    }

    #[test]
    fn test_assess_record_with_weighted_scale_defaults() {
        let thresholds = ThresholdScheme::Risk.default_thresholds();
        assert_eq!(assess_record(&record(59.0, 0.0, 0.0, 0.0), &thresholds).level, Level::Low);
        assert_eq!(
            assess_record(&record(60.0, 0.0, 0.0, 0.0), &thresholds).level,
            Level::Moderate
        );
        assert_eq!(
            assess_record(&record(180.0, 0.0, 0.0, 0.0), &thresholds).level,
            Level::VeryHigh
        );
    }

    #[test]
    fn test_risk_descriptions() {
        assert_eq!(
            RiskAssessment::from_level(Level::VeryHigh).description,
            "Avoid with gout"
        );
        assert_eq!(
            RiskAssessment::from_level(Level::Moderate).label,
            "Moderate risk"
        );
    }
}
