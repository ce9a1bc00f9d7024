//! Food detail screen model.

use serde::Serialize;

use crate::config::Settings;
use crate::core::{Compound, FoodId, FoodRecord};
use crate::scaling::{relative_bar_width, scale_by_serving, serving_purines};
use crate::scoring::{assess_record, risk_score, weighted_score, Level, RiskAssessment};
use crate::view::SortMode;

/// One purine base in the breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundRow {
    pub compound: Compound,
    /// mg per 100g
    pub amount: f64,
    pub weight: f64,
    /// `amount * weight`, this base's share of the weighted score
    pub contribution: f64,
    /// Percent of the largest of the four amounts
    pub bar_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodDetail<'a> {
    pub id: FoodId,
    pub record: &'a FoodRecord,
    pub mode: SortMode,
    pub weighted_score: f64,
    pub risk_score: f64,
    pub risk: RiskAssessment,
    pub serving_grams: f64,
    pub total_per_100g: f64,
    pub total_per_serving: f64,
    pub weighted_per_serving: f64,
    /// Value the mode puts first
    pub headline_value: f64,
    pub headline_level: Level,
    pub compounds: Vec<CompoundRow>,
    pub pinned: bool,
}

impl<'a> FoodDetail<'a> {
    pub fn build(
        id: FoodId,
        record: &'a FoodRecord,
        mode: SortMode,
        settings: &Settings,
        pinned: bool,
    ) -> Self {
        let weighted = weighted_score(record);
        let risk = assess_record(record, &settings.color_thresholds_risk);
        let serving_grams = record.serving_grams();
        let total_per_100g = record.total_purines();
        let total_per_serving = serving_purines(record);

        let (headline_value, headline_level) = match mode {
            SortMode::Total => (
                total_per_100g,
                settings
                    .thresholds(mode.threshold_scheme())
                    .classify(total_per_100g),
            ),
            SortMode::Serving => (
                total_per_serving,
                settings
                    .thresholds(mode.threshold_scheme())
                    .classify(total_per_serving),
            ),
            SortMode::Weighted => (weighted, risk.level),
        };

        Self {
            id,
            record,
            mode,
            weighted_score: weighted,
            risk_score: risk_score(weighted),
            risk,
            serving_grams,
            total_per_100g,
            total_per_serving,
            weighted_per_serving: scale_by_serving(weighted, serving_grams),
            headline_value,
            headline_level,
            compounds: compound_breakdown(record),
            pinned,
        }
    }

    /// Short prose summary shown under the headline
    pub fn explanation(&self) -> String {
        format!(
            "A typical serving of this food is {} g. Its mix of hypoxanthine, adenine, \
             guanine and xanthine gives a weighted risk score of {:.1}.",
            format_grams(self.serving_grams),
            self.weighted_score
        )
    }
}

/// Breakdown rows in weight order (hypoxanthine first)
pub fn compound_breakdown(record: &FoodRecord) -> Vec<CompoundRow> {
    let max_amount = Compound::all()
        .iter()
        .map(|c| record.compound(*c))
        .fold(0.0_f64, f64::max);

    Compound::all()
        .iter()
        .map(|&compound| {
            let amount = record.compound(compound);
            CompoundRow {
                compound,
                amount,
                weight: compound.weight(),
                contribution: amount * compound.weight(),
                bar_width: relative_bar_width(amount, max_amount),
            }
        })
        .collect()
}

fn format_grams(grams: f64) -> String {
    if grams.fract() == 0.0 {
        format!("{:.0}", grams)
    } else {
        format!("{:.1}", grams)
    }
}
