//! Four-bucket level classification shared by every color scheme.
//!
//! A [`ColorThresholds`] triple splits `[0, ∞)` into four half-open
//! buckets: `[0, t1)`, `[t1, t2)`, `[t2, t3)` and `[t3, ∞)`. A value equal
//! to a cutoff belongs to the higher bucket. The per-100g, per-serving and
//! risk schemes are all instances of the same triple, tagged by
//! [`ThresholdScheme`].

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Ordered classification bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Level {
    /// Stable key used by the presentation layer (`low`, `very-high`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Moderate => "moderate",
            Level::High => "high",
            Level::VeryHigh => "very-high",
        }
    }

    pub fn all() -> &'static [Level] {
        &[Level::Low, Level::Moderate, Level::High, Level::VeryHigh]
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which threshold set a value is classified against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThresholdScheme {
    /// Total purines, mg per 100g
    Per100g,
    /// Total purines, mg per serving
    PerServing,
    /// Weighted uricogenic score
    Risk,
}

impl ThresholdScheme {
    /// Settings key the scheme is persisted under
    pub fn settings_key(&self) -> &'static str {
        match self {
            ThresholdScheme::Per100g => "colorThresholdsPer100g",
            ThresholdScheme::PerServing => "colorThresholdsPerServing",
            ThresholdScheme::Risk => "colorThresholdsRisk",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThresholdScheme::Per100g => "Per 100g (mg)",
            ThresholdScheme::PerServing => "Per serving (mg)",
            ThresholdScheme::Risk => "Risk (weighted score)",
        }
    }

    /// Factory default cutoffs for the scheme
    pub fn default_thresholds(&self) -> ColorThresholds {
        match self {
            ThresholdScheme::Per100g => ColorThresholds::new(50.0, 150.0, 200.0),
            ThresholdScheme::PerServing => ColorThresholds::new(30.0, 100.0, 150.0),
            ThresholdScheme::Risk => ColorThresholds::new(60.0, 120.0, 180.0),
        }
    }

    pub fn all() -> &'static [ThresholdScheme] {
        &[
            ThresholdScheme::Per100g,
            ThresholdScheme::PerServing,
            ThresholdScheme::Risk,
        ]
    }
}

/// Ordered triple of cutoffs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorThresholds {
    pub low_to_moderate: f64,
    pub moderate_to_high: f64,
    pub high_to_very_high: f64,
}

impl ColorThresholds {
    /// Cutoffs on the normalized 0-1 risk score
    pub const NORMALIZED_RISK: ColorThresholds = ColorThresholds {
        low_to_moderate: 0.2,
        moderate_to_high: 0.4,
        high_to_very_high: 0.6,
    };

    pub const fn new(low_to_moderate: f64, moderate_to_high: f64, high_to_very_high: f64) -> Self {
        Self {
            low_to_moderate,
            moderate_to_high,
            high_to_very_high,
        }
    }

    /// Classify a value. Boundary values resolve to the higher bucket.
    pub fn classify(&self, value: f64) -> Level {
        if value < self.low_to_moderate {
            Level::Low
        } else if value < self.moderate_to_high {
            Level::Moderate
        } else if value < self.high_to_very_high {
            Level::High
        } else {
            Level::VeryHigh
        }
    }

    /// Cutoffs must be finite, non-negative and strictly ascending
    pub fn validate(&self) -> Result<()> {
        let values = [
            self.low_to_moderate,
            self.moderate_to_high,
            self.high_to_very_high,
        ];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(Error::InvalidThresholds(format!(
                "cutoffs must be finite and non-negative, got {}",
                self
            )));
        }
        if !(self.low_to_moderate < self.moderate_to_high
            && self.moderate_to_high < self.high_to_very_high)
        {
            return Err(Error::InvalidThresholds(format!(
                "cutoffs must be strictly ascending, got {}",
                self
            )));
        }
        Ok(())
    }

    /// Divide every cutoff by `divisor`
    pub fn scaled_down(&self, divisor: f64) -> Self {
        Self::new(
            self.low_to_moderate / divisor,
            self.moderate_to_high / divisor,
            self.high_to_very_high / divisor,
        )
    }

    /// True when every cutoff is below `limit`
    pub fn all_below(&self, limit: f64) -> bool {
        self.low_to_moderate < limit
            && self.moderate_to_high < limit
            && self.high_to_very_high < limit
    }
}

impl std::fmt::Display for ColorThresholds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.low_to_moderate, self.moderate_to_high, self.high_to_very_high
        )
    }
}
