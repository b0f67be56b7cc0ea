//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or event polling failed
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// An interactive prompt failed
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// A required value was left blank
    #[error("{0} is required")]
    Required(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
