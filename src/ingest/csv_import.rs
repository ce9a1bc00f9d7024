//! Reading the purine CSV export into food records.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::categorize::categorize_food;
use crate::core::{Error, FoodRecord, Result, ResultExt};

/// Serving assumed for imported rows, grams
pub const IMPORTED_SERVING: f64 = 100.0;

/// Preparation used when the row has no cut
pub const RAW_PREPARATION: &str = "rå";

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Matvarer")]
    food: String,
    #[serde(rename = "Del", default)]
    cut: Option<String>,
    #[serde(rename = "Adenin", default)]
    adenine: Option<String>,
    #[serde(rename = "Guanin", default)]
    guanine: Option<String>,
    #[serde(rename = "Hypoxantin", default)]
    hypoxanthine: Option<String>,
    #[serde(rename = "Xantin", default)]
    xanthine: Option<String>,
    #[serde(rename = "Total", default)]
    total: Option<String>,
    #[serde(rename = "Beregnet som urinsyre", default)]
    uric_acid: Option<String>,
}

impl CsvRow {
    fn into_record(self) -> FoodRecord {
        let food = self.food.trim();
        let cut = self.cut.as_deref().map(str::trim).unwrap_or("");

        let (name, preparation) = if cut.is_empty() {
            (food.to_string(), RAW_PREPARATION.to_string())
        } else {
            (format!("{} - {}", food, cut), cut.to_lowercase())
        };

        let mut record = FoodRecord::new(name, categorize_food(food, cut));
        record.preparation = Some(preparation);
        record.serving = Some(IMPORTED_SERVING);
        record.adenine = Some(parse_amount(self.adenine.as_deref()));
        record.guanine = Some(parse_amount(self.guanine.as_deref()));
        record.hypoxanthine = Some(parse_amount(self.hypoxanthine.as_deref()));
        record.xanthine = Some(parse_amount(self.xanthine.as_deref()));
        record.total_purines = Some(parse_amount(self.total.as_deref()));
        record.uric_acid = Some(parse_amount(self.uric_acid.as_deref()));
        record
    }
}

/// Parse a CSV amount. Empty, `ND` and unparseable cells are 0; a decimal
/// comma is accepted.
pub fn parse_amount(cell: Option<&str>) -> f64 {
    let Some(cell) = cell.map(str::trim) else {
        return 0.0;
    };
    if cell.is_empty() || cell.eq_ignore_ascii_case("nd") {
        return 0.0;
    }
    cell.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Read CSV rows (with a header line) into records
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<FoodRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        records.push(row?.into_record());
    }
    Ok(records)
}

pub fn read_csv_path(path: &Path) -> Result<Vec<FoodRecord>> {
    let file = std::fs::File::open(path)
        .map_err(Error::from)
        .context(format!("Opening {}", path.display()))?;
    read_csv(file).context(format!("Reading {}", path.display()))
}
