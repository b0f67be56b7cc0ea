//! Case store error types
//!
//! Errors raised while reading or writing `case.json` metadata files.
//! Everything here happens before records reach the selector, so the
//! selector itself never sees a malformed case.

use std::path::PathBuf;
use thiserror::Error;

/// Case store errors
#[derive(Debug, Error)]
pub enum CaseError {
    /// Underlying filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A metadata file could not be parsed
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// The offending `case.json`
        path: PathBuf,
        /// The JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a case failed
    #[error("Failed to serialize case: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The case directory glob pattern was invalid
    #[error("Invalid case directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Case name did not look like `[id] Title`
    #[error("Invalid case name '{0}': expected '[<id>] <title>'")]
    InvalidName(String),

    /// A `case.json` already exists for this id
    #[error("Case {id} already exists at {}", path.display())]
    AlreadyExists {
        /// Case id
        id: String,
        /// Existing case directory
        path: PathBuf,
    },
}
