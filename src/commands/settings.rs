use anyhow::Result;

use crate::cli::SettingsAction;
use crate::config::{SettingsManager, SettingsStore};
use crate::output::terminal::render_settings;
use crate::scoring::{ColorThresholds, ThresholdScheme};

/// Apply a settings action and return the settings table to print
pub fn handle_settings<S: SettingsStore>(
    manager: &mut SettingsManager<S>,
    action: SettingsAction,
) -> Result<String> {
    match action {
        SettingsAction::Show => {}
        SettingsAction::Reset => manager.reset()?,
        SettingsAction::Thresholds {
            scheme,
            low_to_moderate,
            moderate_to_high,
            high_to_very_high,
        } => manager.set_color_thresholds(
            ThresholdScheme::from(scheme),
            ColorThresholds::new(low_to_moderate, moderate_to_high, high_to_very_high),
        )?,
        SettingsAction::SearchSort { mode } => manager.set_search_sort_mode(mode)?,
        SettingsAction::DetailMode { mode } => manager.set_detail_view_mode(mode)?,
    }
    Ok(render_settings(manager.settings()))
}
