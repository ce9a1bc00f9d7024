//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable identifier of a food: its index in the loaded dataset.
pub type FoodId = usize;

/// One row of the purine dataset. All amounts are mg per 100g.
///
/// Numeric fields are optional in the source data; every consumer reads them
/// through the accessor methods, which treat an absent value as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,

    /// Typical serving size in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_purines: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypoxanthine: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adenine: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guanine: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xanthine: Option<f64>,

    /// Purine content expressed as uric acid, carried through from imports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uric_acid: Option<f64>,

    /// Fields this crate does not interpret, kept so a rewrite of the
    /// dataset leaves them in place
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FoodRecord {
    /// Create a record with only the required fields set
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            preparation: None,
            serving: None,
            total_purines: None,
            hypoxanthine: None,
            adenine: None,
            guanine: None,
            xanthine: None,
            uric_acid: None,
            extra: Map::new(),
        }
    }

    pub fn total_purines(&self) -> f64 {
        self.total_purines.unwrap_or(0.0)
    }

    pub fn serving_grams(&self) -> f64 {
        self.serving.unwrap_or(0.0)
    }

    /// Amount of a single compound, 0 when absent
    pub fn compound(&self, compound: Compound) -> f64 {
        let value = match compound {
            Compound::Hypoxanthine => self.hypoxanthine,
            Compound::Adenine => self.adenine,
            Compound::Guanine => self.guanine,
            Compound::Xanthine => self.xanthine,
        };
        value.unwrap_or(0.0)
    }

    pub fn preparation(&self) -> &str {
        self.preparation.as_deref().unwrap_or("")
    }
}

/// The four purine bases that make up the weighted score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compound {
    Hypoxanthine,
    Adenine,
    Guanine,
    Xanthine,
}

impl Compound {
    /// Coefficient applied in the weighted uricogenic score
    pub fn weight(&self) -> f64 {
        match self {
            Compound::Hypoxanthine => 1.0,
            Compound::Adenine => 0.6,
            Compound::Guanine => 0.1,
            Compound::Xanthine => 0.1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Compound::Hypoxanthine => "Hypoxanthine",
            Compound::Adenine => "Adenine",
            Compound::Guanine => "Guanine",
            Compound::Xanthine => "Xanthine",
        }
    }

    /// All compounds in display order
    pub fn all() -> &'static [Compound] {
        &[
            Compound::Hypoxanthine,
            Compound::Adenine,
            Compound::Guanine,
            Compound::Xanthine,
        ]
    }
}
