mod excel_date;
mod fs_utils;
mod json_csv;
mod model;
mod range;
mod xlsx;

pub use model::{EventExport, ReceiptExport};
pub use range::{DateRange, parse_range};

use crate::errors::AppResult;
use crate::models::Snapshot;
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Which collection to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportTarget {
    #[default]
    Events,
    Receipts,
}

/// Write one collection of `snapshot` to `path`, optionally restricted to
/// `range`. Returns the number of rows written.
pub fn export_snapshot(
    snapshot: &Snapshot,
    target: ExportTarget,
    format: ExportFormat,
    path: &Path,
    range: Option<DateRange>,
    force: bool,
) -> AppResult<usize> {
    fs_utils::ensure_writable(path, force)?;

    let in_range = |d| range.is_none_or(|r: DateRange| r.contains(d));

    match target {
        ExportTarget::Events => {
            let rows: Vec<EventExport> = snapshot
                .events
                .iter()
                .filter(|ev| in_range(ev.date))
                .map(EventExport::from)
                .collect();
            if rows.is_empty() {
                warning("No events found for the selected range.");
                return Ok(0);
            }
            write_rows(&rows, format, path)?;
            Ok(rows.len())
        }
        ExportTarget::Receipts => {
            let rows: Vec<ReceiptExport> = snapshot
                .receipts
                .iter()
                .filter(|r| in_range(r.date))
                .map(ReceiptExport::from)
                .collect();
            if rows.is_empty() {
                warning("No receipts found for the selected range.");
                return Ok(0);
            }
            write_rows(&rows, format, path)?;
            Ok(rows.len())
        }
    }
}

fn write_rows<T: model::ExportRow>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => json_csv::export_csv(rows, path),
        ExportFormat::Json => json_csv::export_json(rows, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(rows, path),
    }
}
