//! Per-screen sort and display modes.
//!
//! Each screen that lists or shows foods carries its own [`SortMode`].
//! Modes are independent: changing one screen's mode never touches another.
//! The detail screen can inherit the mode of the screen the user came from.

use serde::{Deserialize, Serialize};

use crate::scoring::ThresholdScheme;

/// Which derived quantity ranks, colors and scales a view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Total purines per 100g
    #[default]
    #[serde(alias = "purine", alias = "per100g")]
    Total,
    /// Total purines per serving
    Serving,
    /// Weighted uricogenic score
    #[serde(alias = "risk")]
    Weighted,
}

impl SortMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Total => "Total",
            SortMode::Serving => "Per serving",
            SortMode::Weighted => "Risk",
        }
    }

    /// Unit of the value the mode shows
    pub fn unit_label(&self) -> &'static str {
        match self {
            SortMode::Total => "mg per 100g",
            SortMode::Serving => "mg per serving",
            SortMode::Weighted => "weighted score",
        }
    }

    /// Line shown above search results
    pub fn search_description(&self) -> &'static str {
        match self {
            SortMode::Total => "Results sorted by purine level",
            SortMode::Serving => "Results sorted by purines per serving",
            SortMode::Weighted => "Results sorted by risk",
        }
    }

    /// Threshold set used for bar colors in this mode
    pub fn threshold_scheme(&self) -> ThresholdScheme {
        match self {
            SortMode::Total => ThresholdScheme::Per100g,
            SortMode::Serving => ThresholdScheme::PerServing,
            SortMode::Weighted => ThresholdScheme::Risk,
        }
    }

    pub fn all() -> &'static [SortMode] {
        &[SortMode::Total, SortMode::Serving, SortMode::Weighted]
    }

    /// Next mode in the toggle cycle
    pub fn next(&self) -> SortMode {
        match self {
            SortMode::Total => SortMode::Serving,
            SortMode::Serving => SortMode::Weighted,
            SortMode::Weighted => SortMode::Total,
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "total" | "purine" | "per100g" => Ok(SortMode::Total),
            "serving" => Ok(SortMode::Serving),
            "weighted" | "risk" => Ok(SortMode::Weighted),
            other => Err(format!(
                "unknown sort mode '{}' (expected total, serving or weighted)",
                other
            )),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Screens of the browser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Screen {
    #[default]
    Home,
    Search,
    Categories,
    CategoryFoods,
    FoodDetail,
}

impl Screen {
    /// True for screens that own a sort mode
    pub fn has_mode(&self) -> bool {
        matches!(
            self,
            Screen::Search | Screen::CategoryFoods | Screen::FoodDetail
        )
    }
}

/// The three independent mode selections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub category_sort: SortMode,
    pub search_sort: SortMode,
    pub detail_mode: SortMode,
}

impl ViewState {
    /// Start a session from persisted search and detail modes.
    /// The category mode is never persisted and starts at the default.
    pub fn from_persisted(search_sort: SortMode, detail_mode: SortMode) -> Self {
        Self {
            category_sort: SortMode::default(),
            search_sort,
            detail_mode,
        }
    }

    /// Mode of a screen, `None` for screens without one
    pub fn mode_for(&self, screen: Screen) -> Option<SortMode> {
        match screen {
            Screen::Search => Some(self.search_sort),
            Screen::CategoryFoods => Some(self.category_sort),
            Screen::FoodDetail => Some(self.detail_mode),
            Screen::Home | Screen::Categories => None,
        }
    }

    /// Set a screen's mode. Returns true when the stored mode changed.
    pub fn set_mode(&mut self, screen: Screen, mode: SortMode) -> bool {
        let slot = match screen {
            Screen::Search => &mut self.search_sort,
            Screen::CategoryFoods => &mut self.category_sort,
            Screen::FoodDetail => &mut self.detail_mode,
            Screen::Home | Screen::Categories => return false,
        };
        let changed = *slot != mode;
        *slot = mode;
        changed
    }

    /// Seed the detail mode from the screen the user navigated from.
    /// Screens without a mode leave the detail mode as it is.
    pub fn inherit_detail_mode(&mut self, from: Screen) {
        if from == Screen::FoodDetail {
            return;
        }
        if let Some(mode) = self.mode_for(from) {
            self.detail_mode = mode;
        }
    }
}
