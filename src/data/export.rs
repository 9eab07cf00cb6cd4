use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::ExportError;

use super::model::Record;
#[cfg(feature = "xlsx")]
use super::model::COLUMN_HEADERS;

/// Extension every export file ends with.
pub const EXTENSION: &str = ".xlsx";

const DEFAULT_PREFIX: &str = "filtered_meteor_data_";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// What an export call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved(PathBuf),
    /// No records were given; nothing was written.
    NothingToSave,
}

/// Whether this build can write spreadsheets.
pub fn is_available() -> bool {
    cfg!(feature = "xlsx")
}

// ---------------------------------------------------------------------------
// File naming
// ---------------------------------------------------------------------------

/// `filtered_meteor_data_YYYY-MM-DD_HH-MM-SS`, without extension.
pub fn default_file_name(now: NaiveDateTime) -> String {
    format!("{DEFAULT_PREFIX}{}", now.format(TIMESTAMP_FORMAT))
}

/// Pick the output path: the requested name as typed, or a timestamped
/// default when none (or a blank one) is given, always ending in `.xlsx`.
pub fn resolve_file_name(requested: Option<&str>, now: NaiveDateTime) -> PathBuf {
    let name = match requested.filter(|n| !n.trim().is_empty()) {
        Some(name) => name.to_string(),
        None => default_file_name(now),
    };

    if name.to_lowercase().ends_with(EXTENSION) {
        PathBuf::from(name)
    } else {
        PathBuf::from(name + EXTENSION)
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write `records` to a single-sheet workbook.
///
/// The capability check happens before anything touches the filesystem; an
/// empty slice writes nothing.
pub fn export_records(
    records: &[Record],
    requested: Option<&str>,
) -> Result<ExportOutcome, ExportError> {
    if records.is_empty() {
        log::info!("Export skipped, no records");
        return Ok(ExportOutcome::NothingToSave);
    }
    if !is_available() {
        return Err(ExportError::Unavailable);
    }

    let path = resolve_file_name(requested, Local::now().naive_local());
    log::debug!("Exporting {} records to {}", records.len(), path.display());

    write_workbook(records, &path)?;

    log::info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(ExportOutcome::Saved(path))
}

#[cfg(feature = "xlsx")]
fn write_workbook(records: &[Record], path: &Path) -> Result<(), ExportError> {
    use rust_xlsxwriter::{Workbook, XlsxError};

    let build = || -> Result<(), XlsxError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        for (col, header) in (0u16..).zip(COLUMN_HEADERS) {
            sheet.write_string(0, col, header)?;
        }
        for (row, record) in (1u32..).zip(records) {
            for (col, value) in (0u16..).zip(record.fields()) {
                // Empty text stays an empty cell.
                if !value.is_empty() {
                    sheet.write_string(row, col, value)?;
                }
            }
        }

        workbook.save(path)
    };

    build().map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(not(feature = "xlsx"))]
fn write_workbook(_records: &[Record], _path: &Path) -> Result<(), ExportError> {
    Err(ExportError::Unavailable)
}
