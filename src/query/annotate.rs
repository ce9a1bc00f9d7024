//! Presentation annotations for ranked results.

use serde::Serialize;

use crate::config::Settings;
use crate::core::{FoodId, FoodRecord};
use crate::scaling::{relative_bar_width, serving_purines, GlobalScale};
use crate::scoring::{assess_record, risk_score, weighted_score, Level, RiskAssessment};
use crate::selection::PinSet;
use crate::view::SortMode;

/// A record with everything a result row needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedFood<'a> {
    pub id: FoodId,
    pub record: &'a FoodRecord,
    pub weighted_score: f64,
    pub risk_score: f64,
    pub risk: RiskAssessment,
    pub serving_purines: f64,
    /// The mode's headline value (see [`SortMode::unit_label`])
    pub display_value: f64,
    /// Percent of the catalog-wide maximum for the mode, 0-100
    pub bar_width: f64,
    /// Color bucket: purine amount for total/serving, risk for weighted
    pub bar_level: Level,
    pub pinned: bool,
}

/// Shared inputs for annotating results
#[derive(Debug, Clone, Copy)]
pub struct Annotator<'a> {
    scale: &'a GlobalScale,
    settings: &'a Settings,
    pins: &'a PinSet,
}

impl<'a> Annotator<'a> {
    pub fn new(scale: &'a GlobalScale, settings: &'a Settings, pins: &'a PinSet) -> Self {
        Self {
            scale,
            settings,
            pins,
        }
    }

    pub fn annotate(&self, id: FoodId, record: &'a FoodRecord, mode: SortMode) -> AnnotatedFood<'a> {
        let weighted = weighted_score(record);
        let risk = assess_record(record, &self.settings.color_thresholds_risk);
        let serving = serving_purines(record);

        let (display_value, max_value) = match mode {
            SortMode::Total => (record.total_purines(), self.scale.max_total_purine),
            SortMode::Serving => (serving, self.scale.max_serving_purine),
            SortMode::Weighted => (weighted, self.scale.max_weighted_score),
        };
        let bar_level = match mode {
            SortMode::Weighted => risk.level,
            SortMode::Total | SortMode::Serving => self
                .settings
                .thresholds(mode.threshold_scheme())
                .classify(display_value),
        };

        AnnotatedFood {
            id,
            record,
            weighted_score: weighted,
            risk_score: risk_score(weighted),
            risk,
            serving_purines: serving,
            display_value,
            bar_width: relative_bar_width(display_value, max_value),
            bar_level,
            pinned: self.pins.contains(id),
        }
    }

    /// Annotate ids in the given order. Unknown ids are skipped.
    pub fn annotate_all(
        &self,
        records: &'a [FoodRecord],
        ids: &[FoodId],
        mode: SortMode,
    ) -> Vec<AnnotatedFood<'a>> {
        ids.iter()
            .filter_map(|&id| records.get(id).map(|record| self.annotate(id, record, mode)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<FoodRecord> {
        let mut liver = FoodRecord::new("Lever", "Innmat");
        liver.total_purines = Some(220.0);
        liver.serving = Some(100.0);
        liver.hypoxanthine = Some(100.0);
        liver.adenine = Some(50.0);
        liver.guanine = Some(10.0);
        liver.xanthine = Some(10.0);

        let mut beer = FoodRecord::new("Pils øl", "Alkohol");
        beer.total_purines = Some(10.0);
        beer.serving = Some(500.0);
        vec![liver, beer]
    }

    #[test]
    fn test_total_mode_colors_by_purine_amount() {
        let records = records();
        let scale = GlobalScale::from_records(&records);
        let settings = Settings::default();
        let pins = PinSet::new();
        let annotator = Annotator::new(&scale, &settings, &pins);

        let liver = annotator.annotate(0, &records[0], SortMode::Total);
        assert_eq!(liver.display_value, 220.0);
        assert_eq!(liver.bar_width, 100.0);
        assert_eq!(liver.bar_level, Level::VeryHigh);
        // 132 / 300 = 0.44
        assert_eq!(liver.risk.level, Level::High);
        assert!(!liver.pinned);
    }

    #[test]
    fn test_weighted_mode_colors_by_risk() {
        let records = records();
        let scale = GlobalScale::from_records(&records);
        let settings = Settings::default();
        let mut pins = PinSet::new();
        pins.toggle(1).unwrap();
        let annotator = Annotator::new(&scale, &settings, &pins);

        let rows = annotator.annotate_all(&records, &[0, 1, 7], SortMode::Weighted);
        assert_eq!(rows.len(), 2);
        assert!((rows[0].display_value - 132.0).abs() < 1e-9);
        assert_eq!(rows[0].bar_level, Level::High);
        assert_eq!(rows[1].bar_width, 0.0);
        assert_eq!(rows[1].bar_level, Level::Low);
        assert!(rows[1].pinned);
    }

    #[test]
    fn test_serving_mode_uses_serving_scale() {
        let records = records();
        let scale = GlobalScale::from_records(&records);
        let settings = Settings::default();
        let pins = PinSet::new();
        let annotator = Annotator::new(&scale, &settings, &pins);

        let beer = annotator.annotate(1, &records[1], SortMode::Serving);
        assert_eq!(beer.display_value, 50.0);
        // liver serving = 220
        assert!((beer.bar_width - 50.0 / 220.0 * 100.0).abs() < 1e-9);
        assert_eq!(beer.bar_level, Level::Moderate);
    }

    #[test]
    fn test_empty_scale_gives_zero_width() {
        let records = records();
        let scale = GlobalScale::default();
        let settings = Settings::default();
        let pins = PinSet::new();
        let annotator = Annotator::new(&scale, &settings, &pins);
        assert_eq!(annotator.annotate(0, &records[0], SortMode::Total).bar_width, 0.0);
    }
}
