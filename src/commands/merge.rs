use anyhow::Result;
use std::path::PathBuf;

use crate::formatting::FormattingConfig;
use crate::ingest::{backup_path, merge_files, MergeOptions};

/// Merge `csv` into the dataset at `data` and return a short summary
pub fn handle_merge(
    csv: PathBuf,
    data: PathBuf,
    report: Option<PathBuf>,
    fmt: &FormattingConfig,
) -> Result<String> {
    let options = MergeOptions {
        csv,
        data,
        report,
    };
    let outcome = merge_files(&options)?;

    let mut lines = vec![
        fmt.header("Merge complete"),
        format!("  CSV entries processed: {}", outcome.imported_count),
        format!("  Duplicates skipped:    {}", outcome.duplicates.len()),
        format!("  New entries added:     {}", outcome.new_entries.len()),
        format!("  Total entries:         {}", outcome.merged.len()),
        format!(
            "  Backup:                {}",
            backup_path(&options.data).display()
        ),
    ];
    if let Some(report) = &options.report {
        lines.push(format!("  Report:                {}", report.display()));
    }
    Ok(lines.join("\n") + "\n")
}
