//! User settings: persisted sort modes and color thresholds.
//!
//! Every key is decoded on its own. A key that is missing, fails to decode
//! or holds an invalid threshold triple falls back to its default without
//! affecting the others. Risk thresholds saved on the old normalized 0-1
//! scale are migrated to the weighted-score scale and written back.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::store::SettingsStore;
use crate::core::Result;
use crate::scoring::{ColorThresholds, ThresholdScheme};
use crate::view::SortMode;

pub const SEARCH_SORT_MODE_KEY: &str = "searchSortMode";
pub const DETAIL_VIEW_MODE_KEY: &str = "detailViewMode";

/// Risk cutoffs all below this were saved on the normalized scale
const LEGACY_RISK_SCALE_LIMIT: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub search_sort_mode: SortMode,
    pub detail_view_mode: SortMode,
    pub color_thresholds_per_100g: ColorThresholds,
    pub color_thresholds_per_serving: ColorThresholds,
    pub color_thresholds_risk: ColorThresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_sort_mode: SortMode::Total,
            detail_view_mode: SortMode::Total,
            color_thresholds_per_100g: ThresholdScheme::Per100g.default_thresholds(),
            color_thresholds_per_serving: ThresholdScheme::PerServing.default_thresholds(),
            color_thresholds_risk: ThresholdScheme::Risk.default_thresholds(),
        }
    }
}

impl Settings {
    /// Thresholds for a scheme. Risk cutoffs are on the weighted-score scale.
    pub fn thresholds(&self, scheme: ThresholdScheme) -> ColorThresholds {
        match scheme {
            ThresholdScheme::Per100g => self.color_thresholds_per_100g,
            ThresholdScheme::PerServing => self.color_thresholds_per_serving,
            ThresholdScheme::Risk => self.color_thresholds_risk,
        }
    }

    fn thresholds_mut(&mut self, scheme: ThresholdScheme) -> &mut ColorThresholds {
        match scheme {
            ThresholdScheme::Per100g => &mut self.color_thresholds_per_100g,
            ThresholdScheme::PerServing => &mut self.color_thresholds_per_serving,
            ThresholdScheme::Risk => &mut self.color_thresholds_risk,
        }
    }
}

/// Current settings plus the store they persist to
#[derive(Debug)]
pub struct SettingsManager<S: SettingsStore> {
    store: S,
    settings: Settings,
}

impl<S: SettingsStore> SettingsManager<S> {
    /// Load settings from the store. Never fails; bad keys fall back to
    /// their defaults.
    pub fn load(mut store: S) -> Self {
        let defaults = Settings::default();
        let settings = Settings {
            search_sort_mode: decode_key(&store, SEARCH_SORT_MODE_KEY)
                .unwrap_or(defaults.search_sort_mode),
            detail_view_mode: decode_key(&store, DETAIL_VIEW_MODE_KEY)
                .unwrap_or(defaults.detail_view_mode),
            color_thresholds_per_100g: load_thresholds(&mut store, ThresholdScheme::Per100g),
            color_thresholds_per_serving: load_thresholds(&mut store, ThresholdScheme::PerServing),
            color_thresholds_risk: load_thresholds(&mut store, ThresholdScheme::Risk),
        };
        Self { store, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn thresholds(&self, scheme: ThresholdScheme) -> ColorThresholds {
        self.settings.thresholds(scheme)
    }

    /// Persist, then apply. A failed write leaves the settings unchanged.
    pub fn set_search_sort_mode(&mut self, mode: SortMode) -> Result<()> {
        self.store
            .set(SEARCH_SORT_MODE_KEY, serde_json::to_value(mode)?)?;
        self.settings.search_sort_mode = mode;
        Ok(())
    }

    pub fn set_detail_view_mode(&mut self, mode: SortMode) -> Result<()> {
        self.store
            .set(DETAIL_VIEW_MODE_KEY, serde_json::to_value(mode)?)?;
        self.settings.detail_view_mode = mode;
        Ok(())
    }

    /// Replace a threshold set. Invalid triples are rejected and nothing
    /// changes.
    pub fn set_color_thresholds(
        &mut self,
        scheme: ThresholdScheme,
        thresholds: ColorThresholds,
    ) -> Result<()> {
        thresholds.validate()?;
        persist_thresholds(&mut self.store, scheme, thresholds)?;
        *self.settings.thresholds_mut(scheme) = thresholds;
        Ok(())
    }

    /// Restore every default and persist them. The in-memory settings
    /// switch over only once every default is written.
    pub fn reset(&mut self) -> Result<()> {
        let defaults = Settings::default();
        self.store.clear()?;
        self.store.set(
            SEARCH_SORT_MODE_KEY,
            serde_json::to_value(defaults.search_sort_mode)?,
        )?;
        self.store.set(
            DETAIL_VIEW_MODE_KEY,
            serde_json::to_value(defaults.detail_view_mode)?,
        )?;
        for scheme in ThresholdScheme::all() {
            persist_thresholds(&mut self.store, *scheme, defaults.thresholds(*scheme))?;
        }
        self.settings = defaults;
        Ok(())
    }
}

fn decode_key<S: SettingsStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let value = store.get(key)?;
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            log::warn!("Ignoring unreadable setting '{}': {}. Using default.", key, e);
            None
        }
    }
}

fn load_thresholds<S: SettingsStore>(store: &mut S, scheme: ThresholdScheme) -> ColorThresholds {
    let default = scheme.default_thresholds();
    let Some(stored) = decode_key::<S, ColorThresholds>(store, scheme.settings_key()) else {
        return default;
    };

    if scheme == ThresholdScheme::Risk && stored.all_below(LEGACY_RISK_SCALE_LIMIT) {
        log::info!(
            "Migrating risk thresholds {} from the normalized scale to {}",
            stored,
            default
        );
        if let Err(e) = persist_thresholds(store, scheme, default) {
            log::warn!("Failed to save migrated risk thresholds: {}", e);
        }
        return default;
    }

    match stored.validate() {
        Ok(()) => stored,
        Err(e) => {
            log::warn!(
                "Ignoring setting '{}': {}. Using default.",
                scheme.settings_key(),
                e
            );
            default
        }
    }
}

fn persist_thresholds<S: SettingsStore>(
    store: &mut S,
    scheme: ThresholdScheme,
    thresholds: ColorThresholds,
) -> Result<()> {
    store.set(scheme.settings_key(), serde_json::to_value(thresholds)?)
}
