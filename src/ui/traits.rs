//! Core traits for the picker front-ends

use super::error::Result;
use crate::selector::{SelectionEngine, Submission};

/// How an interactive pick ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The user submitted; carries the engine's result
    Submitted(Submission),
    /// The user backed out without submitting
    Aborted,
}

impl PickOutcome {
    /// The submission, if the pick was not aborted
    #[must_use]
    pub fn submission(self) -> Option<Submission> {
        match self {
            Self::Submitted(submission) => Some(submission),
            Self::Aborted => None,
        }
    }
}

/// Drives a [`SelectionEngine`] until the user submits or aborts
///
/// Implementations only read engine state for rendering and forward user
/// input into the engine's operations. The engine decides what is visible
/// and what gets submitted.
pub trait CasePicker {
    /// Run the picker
    ///
    /// # Errors
    ///
    /// Returns an error if the front-end cannot be initialized or fails
    /// while running.
    fn pick(&self, engine: &mut SelectionEngine) -> Result<PickOutcome>;
}
