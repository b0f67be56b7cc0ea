//! Kase - keep track of support cases
//!
//! Cases live one per directory under a case root, each described by a
//! `case.json`. This library loads them, filters them with a fuzzy
//! partial-ratio matcher and drives an interactive picker to jump into one,
//! or to pick cases from a Salesforce CSV export to create.

use thiserror::Error;

pub mod cases;
pub mod cli;
pub mod commands;
pub mod config;
pub mod importer;
pub mod logging;
pub mod selector;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum KaseError {
    #[error("Case store error: {0}")]
    Case(#[from] cases::CaseError),

    #[error("Import error: {0}")]
    Import(#[from] importer::ImportError),

    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),

    #[error("Logging error: {0}")]
    Logging(#[from] logging::LoggingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
