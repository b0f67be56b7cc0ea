//! Trailing debounce for query updates
//!
//! Every keystroke restarts the quiet period. Once the period elapses with no
//! further change, only the latest query is released. Time is passed in by
//! the caller so the event loop (and tests) own the clock.

use std::time::{Duration, Instant};

/// Default quiet period before a query is applied
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Holds back query changes until input goes quiet
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a new query; replaces any pending one and restarts the timer
    pub fn schedule(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some((query.into(), now + self.quiet));
    }

    /// Release the pending query if its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(query, _)| query),
            _ => None,
        }
    }

    /// Release the pending query immediately
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(query, _)| query)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending query becomes due
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    #[must_use]
    pub const fn quiet(&self) -> Duration {
        self.quiet
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
