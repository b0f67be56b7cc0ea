//! Importer error types

use crate::cases::CaseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or importing a report export
#[derive(Debug, Error)]
pub enum ImportError {
    /// The export could not be opened
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed mid-file
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV file is missing a header row.")]
    MissingHeader,

    /// Header row lacks required columns
    #[error("CSV file is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A row has blank values for required columns
    #[error("Row {line} is missing value(s) for: {}", columns.join(", "))]
    MissingValues { line: usize, columns: Vec<String> },

    /// Writing an imported case failed
    #[error(transparent)]
    Case(#[from] CaseError),
}
