use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::fmt::Write;

use super::MergeOutcome;
use crate::core::FoodRecord;

const RULE: &str = "======================================================================";

/// Plain-text merge report: counts, duplicates, then new foods grouped by
/// category (categories and names sorted)
pub fn render_report(outcome: &MergeOutcome, generated_at: DateTime<Local>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, outcome, generated_at);
    out
}

fn write_report(
    out: &mut String,
    outcome: &MergeOutcome,
    generated_at: DateTime<Local>,
) -> std::fmt::Result {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "MERGE REPORT")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Generated:                {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out)?;
    writeln!(out, "CSV entries processed:    {}", outcome.imported_count)?;
    writeln!(out, "Duplicates found:         {}", outcome.duplicates.len())?;
    writeln!(out, "New entries added:        {}", outcome.new_entries.len())?;
    writeln!(out, "Total entries in dataset: {}", outcome.merged.len())?;
    writeln!(out)?;

    writeln!(out, "{}", RULE)?;
    writeln!(out, "DUPLICATES (kept existing data):")?;
    writeln!(out, "{}", RULE)?;
    for dup in &outcome.duplicates {
        writeln!(out, "  CSV: {} (total: {:.1})", dup.imported_name, dup.imported_total)?;
        writeln!(
            out,
            "  ≈ existing: {} (total: {:.1}, similarity {:.2})",
            dup.existing_name, dup.existing_total, dup.similarity
        )?;
        writeln!(out)?;
    }

    writeln!(out, "{}", RULE)?;
    writeln!(out, "NEW ENTRIES ADDED:")?;
    writeln!(out, "{}", RULE)?;
    for (category, mut entries) in group_by_category(&outcome.new_entries) {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        writeln!(out)?;
        writeln!(out, "{}:", category)?;
        for entry in entries {
            writeln!(
                out,
                "  - {} (total: {:.1} mg/100g)",
                entry.name,
                entry.total_purines()
            )?;
        }
    }
    Ok(())
}

fn group_by_category(records: &[FoodRecord]) -> BTreeMap<&str, Vec<&FoodRecord>> {
    let mut groups: BTreeMap<&str, Vec<&FoodRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.category.as_str()).or_default().push(record);
    }
    groups
}
