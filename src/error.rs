use std::path::PathBuf;

use thiserror::Error;

/// Failure to read the input dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to write the spreadsheet export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Binary was built without the `xlsx` feature.
    #[error(
        "spreadsheet export is not available in this build; \
         rebuild with `cargo build --features xlsx` to enable it"
    )]
    Unavailable,

    #[cfg(feature = "xlsx")]
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// A filter field name other than `mass` or `year`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter field '{0}', expected 'mass' or 'year'")]
pub struct ParseFieldError(pub String);
