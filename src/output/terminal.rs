//! Plain terminal rendering of browser screens.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::Settings;
use crate::core::Result;
use crate::formatting::FormattingConfig;
use crate::query::{AnnotatedFood, MIN_QUERY_CHARS};
use crate::scoring::ThresholdScheme;
use crate::taxonomy::CategoryEntry;
use crate::view::{Comparison, FoodDetail, ScreenContent, ScreenView, SearchResults, SortMode};

/// Character cells in a full-width bar
pub const BAR_CELLS: usize = 24;

/// Text bar for a 0-100 width
pub fn render_bar(width_percent: f64) -> String {
    let clamped = if width_percent.is_finite() {
        width_percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let filled = ((clamped / 100.0) * BAR_CELLS as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

/// First letter uppercased
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn render_screen(view: &ScreenView<'_>, fmt: &FormattingConfig) -> String {
    let mut out = String::new();
    if !view.comparison.items.is_empty() {
        out.push_str(&render_comparison(&view.comparison, fmt));
        out.push('\n');
    }

    let mode = view.mode.unwrap_or_default();
    let body = match &view.content {
        ScreenContent::Home {
            food_count,
            category_count,
        } => format!(
            "{}\n{} foods in {} categories\n",
            fmt.header("Purine reference"),
            food_count,
            category_count
        ),
        ScreenContent::Search {
            query,
            description,
            results,
        } => render_search(query, description, results, mode, fmt),
        ScreenContent::Categories { categories } => render_categories(categories),
        ScreenContent::CategoryFoods { category, results } => format!(
            "{} {}\n{}",
            fmt.header(category),
            fmt.dim(&format!("(sorted by {})", mode.display_name().to_lowercase())),
            render_rows(results, mode, fmt)
        ),
        ScreenContent::FoodDetail(detail) => render_detail(detail, fmt),
    };
    out.push_str(&body);
    out
}

fn render_search(
    query: &str,
    description: &str,
    results: &SearchResults<'_>,
    mode: SortMode,
    fmt: &FormattingConfig,
) -> String {
    match results {
        SearchResults::TooShort => fmt.warning(&format!(
            "Type at least {} characters to search\n",
            MIN_QUERY_CHARS
        )),
        SearchResults::Matches(rows) if rows.is_empty() => {
            format!("No results for \"{}\"\n", query)
        }
        SearchResults::Matches(rows) => format!(
            "{}\n{}",
            fmt.dim(description),
            render_rows(rows, mode, fmt)
        ),
    }
}

/// One line per food: pin mark, name, bar, value
pub fn render_rows(rows: &[AnnotatedFood<'_>], mode: SortMode, fmt: &FormattingConfig) -> String {
    if rows.is_empty() {
        return "No foods found\n".to_string();
    }
    let name_width = rows
        .iter()
        .map(|row| row.record.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let pin = if row.pinned { "*" } else { " " };
        let name = format!("{:<width$}", row.record.name, width = name_width);
        let bar = fmt.level(&render_bar(row.bar_width), row.bar_level);
        let value = fmt.bold(&format!("{:.1}", row.display_value));
        out.push_str(&format!(
            "{} [{:>4}] {}  {} {} {}\n",
            pin,
            row.id,
            name,
            bar,
            value,
            mode.unit_label()
        ));
    }
    out
}

pub fn render_categories(categories: &[CategoryEntry]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Foods"]);
    for entry in categories {
        table.add_row(vec![entry.name.clone(), entry.count.to_string()]);
    }
    format!("{}\n", table)
}

pub fn render_detail(detail: &FoodDetail<'_>, fmt: &FormattingConfig) -> String {
    let record = detail.record;
    let mut out = String::new();

    out.push_str(&format!("{}\n", fmt.header(&record.name)));
    let meta = match record.preparation.as_deref().filter(|p| !p.is_empty()) {
        Some(preparation) => format!("{} • {}", capitalize(preparation), capitalize(&record.category)),
        None => capitalize(&record.category),
    };
    out.push_str(&format!("{}\n", fmt.dim(&meta)));
    out.push_str(&format!("Serving: {} g\n\n", detail.serving_grams));

    out.push_str(&format!(
        "{}  {} {}\n",
        fmt.level(detail.risk.label, detail.risk.level),
        fmt.level(&format!("{:.1}", detail.headline_value), detail.headline_level),
        detail.mode.unit_label()
    ));
    out.push_str(&format!("{}\n\n", detail.risk.description));

    for row in &detail.compounds {
        out.push_str(&format!(
            "  {:<13} {}  {:>6.1} mg  x{:.1} = {:.1}\n",
            row.compound.display_name(),
            render_bar(row.bar_width),
            row.amount,
            row.weight,
            row.contribution
        ));
    }
    out.push('\n');
    out.push_str(&format!("{}\n\n", detail.explanation()));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["", "Per 100g", "Per serving"]);
    table.add_row(vec![
        "Total purines (mg)".to_string(),
        format!("{:.1}", detail.total_per_100g),
        format!("{:.1}", detail.total_per_serving),
    ]);
    table.add_row(vec![
        "Weighted score".to_string(),
        format!("{:.1}", detail.weighted_score),
        format!("{:.1}", detail.weighted_per_serving),
    ]);
    out.push_str(&format!("{}\n", table));
    if detail.pinned {
        out.push_str(&fmt.dim("Pinned for comparison\n"));
    }
    out
}

pub fn render_comparison(comparison: &Comparison<'_>, fmt: &FormattingConfig) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Food", "mg/100g", "mg/serving", "Weighted", "Risk"]);
    for item in &comparison.items {
        table.add_row(vec![
            item.id.to_string(),
            item.record.name.clone(),
            format!("{:.1}", item.record.total_purines()),
            format!("{:.1}", item.serving_purines),
            format!("{:.1}", item.weighted_score),
            item.risk.label.to_string(),
        ]);
    }
    format!(
        "{}\n{}\n",
        fmt.header(&format!(
            "Compare ({}/{})",
            comparison.items.len(),
            comparison.capacity
        )),
        table
    )
}

pub fn render_settings(settings: &Settings) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Setting", "Value"]);
    table.add_row(vec![
        "Search sort".to_string(),
        settings.search_sort_mode.display_name().to_string(),
    ]);
    table.add_row(vec![
        "Detail view".to_string(),
        settings.detail_view_mode.display_name().to_string(),
    ]);
    for scheme in ThresholdScheme::all() {
        table.add_row(vec![
            format!("{} thresholds", scheme.display_name()),
            settings.thresholds(*scheme).to_string(),
        ]);
    }
    format!("{}\n", table)
}

/// Print to stdout, or write to `output_file` when given
pub fn write_output(text: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}
