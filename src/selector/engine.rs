//! Selection engine state machine
//!
//! Holds the full case set and derives the visible list from the current
//! query and the excluded-cases toggle. Tracks the cursor, marks and
//! exclusions, and queues [`SelectionEvent`]s for the presentation layer.
//!
//! Every operation is total: empty lists, a missing cursor or an
//! unavailable action degrade to no-ops instead of errors.

use super::scorer::QueryScorer;
use crate::cases::Case;
use indexmap::IndexMap;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Actions the presentation layer can bind keys to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorAction {
    /// Move the cursor one row up
    CursorUp,
    /// Move the cursor one row down
    CursorDown,
    /// Submit the current selection (or the marked cases)
    Submit,
    /// Mark/unmark the highlighted case
    ToggleMark,
    /// Show/hide the excluded cases
    ToggleExclude,
}

impl SelectorAction {
    /// Short label for help bars
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CursorUp => "up",
            Self::CursorDown => "down",
            Self::Submit => "submit",
            Self::ToggleMark => "mark/unmark",
            Self::ToggleExclude => "toggle existing",
        }
    }
}

/// Result handed to the host when the user submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Single-select result; `None` when nothing was highlighted
    Single(Option<Case>),
    /// Multi-select result, in case-set order
    Many(Vec<Case>),
}

impl Submission {
    /// All submitted cases
    #[must_use]
    pub fn cases(&self) -> Vec<&Case> {
        match self {
            Self::Single(case) => case.iter().collect(),
            Self::Many(cases) => cases.iter().collect(),
        }
    }

    /// Take ownership of the submitted cases
    #[must_use]
    pub fn into_cases(self) -> Vec<Case> {
        match self {
            Self::Single(case) => case.into_iter().collect(),
            Self::Many(cases) => cases,
        }
    }

    /// Whether nothing was submitted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(case) => case.is_none(),
            Self::Many(cases) => cases.is_empty(),
        }
    }
}

/// Notifications emitted after an operation completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Cursor or visible list changed; carries the new highlighted case
    Changed(Option<Case>),
    /// `submit` was called
    Submitted(Submission),
}

/// Construction options for [`SelectionEngine`]
#[derive(Debug, Clone, Default)]
pub struct SelectorConfig {
    /// Every case the engine can show, in store order
    pub cases: IndexMap<String, Case>,
    /// Query applied before the first render
    pub initial_query: String,
    /// Mark-many-then-submit instead of pick-one
    pub multi_select: bool,
    /// Ids hidden until the user toggles them visible
    pub excluded: HashSet<String>,
}

impl SelectorConfig {
    /// Single-select configuration over `cases`
    #[must_use]
    pub fn new(cases: IndexMap<String, Case>) -> Self {
        Self {
            cases,
            ..Self::default()
        }
    }

    /// Set the initial query
    #[must_use]
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = query.into();
        self
    }

    /// Enable multi-select
    #[must_use]
    pub const fn with_multi_select(mut self, multi: bool) -> Self {
        self.multi_select = multi;
        self
    }

    /// Set the excluded ids
    #[must_use]
    pub fn with_excluded(mut self, excluded: HashSet<String>) -> Self {
        self.excluded = excluded;
        self
    }
}

/// The fuzzy case selector
#[derive(Debug)]
pub struct SelectionEngine {
    cases: IndexMap<String, Case>,
    query: String,
    /// Positions into `cases`, in case-set order
    visible: Vec<usize>,
    /// Index into `visible`; `None` exactly when `visible` is empty
    cursor: Option<usize>,
    multi_select: bool,
    marked: HashSet<String>,
    excluded: HashSet<String>,
    excluded_hidden: bool,
    events: VecDeque<SelectionEvent>,
}

impl SelectionEngine {
    /// Build an engine and compute its initial visible list
    ///
    /// No events are queued for the initial state.
    #[must_use]
    pub fn new(config: SelectorConfig) -> Self {
        let mut engine = Self {
            cases: config.cases,
            query: config.initial_query,
            visible: Vec::new(),
            cursor: None,
            multi_select: config.multi_select,
            marked: HashSet::new(),
            excluded: config.excluded,
            excluded_hidden: true,
            events: VecDeque::new(),
        };
        engine.visible = engine.compute_visible();
        engine.cursor = (!engine.visible.is_empty()).then_some(0);
        debug!(
            total = engine.cases.len(),
            visible = engine.visible.len(),
            multi_select = engine.multi_select,
            excluded = engine.excluded.len(),
            "selection engine ready"
        );
        engine
    }

    /// Replace the query and recompute the visible list
    ///
    /// The cursor stays on the previously highlighted case if it is still
    /// visible, otherwise it resets to the first row.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    /// Move the cursor by `delta` rows, clamped to the visible list
    pub fn move_cursor(&mut self, delta: isize) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let last = self.visible.len().saturating_sub(1);
        let target = cursor.saturating_add_signed(delta).min(last);
        if target != cursor {
            self.cursor = Some(target);
            self.notify_changed();
        }
    }

    /// The highlighted case, if any
    #[must_use]
    pub fn current_selection(&self) -> Option<&Case> {
        let position = *self.visible.get(self.cursor?)?;
        self.cases.get_index(position).map(|(_, case)| case)
    }

    /// Mark or unmark the highlighted case
    ///
    /// Returns `false` when marking is unavailable (single-select mode) or
    /// nothing is highlighted.
    pub fn toggle_mark(&mut self) -> bool {
        if !self.multi_select {
            return false;
        }
        let Some(id) = self.current_selection().map(|case| case.id.clone()) else {
            return false;
        };
        if !self.marked.remove(&id) {
            debug!(%id, "marked case");
            self.marked.insert(id);
        }
        true
    }

    /// Flip whether excluded cases are shown
    ///
    /// Returns `false` when there is nothing to exclude.
    pub fn toggle_exclude_visibility(&mut self) -> bool {
        if self.excluded.is_empty() {
            return false;
        }
        self.excluded_hidden = !self.excluded_hidden;
        debug!(hidden = self.excluded_hidden, "toggled excluded cases");
        self.refresh();
        true
    }

    /// Produce the outward-facing result
    ///
    /// Single-select returns the highlighted case. Multi-select returns every
    /// marked case in case-set order, even ones filtered out of view, or the
    /// highlighted case when nothing is marked.
    pub fn submit(&mut self) -> Submission {
        let submission = if !self.multi_select {
            Submission::Single(self.current_selection().cloned())
        } else if self.marked.is_empty() {
            Submission::Many(self.current_selection().cloned().into_iter().collect())
        } else {
            Submission::Many(
                self.cases
                    .values()
                    .filter(|case| self.marked.contains(&case.id))
                    .cloned()
                    .collect(),
            )
        };
        debug!(count = submission.cases().len(), "submitted selection");
        self.events
            .push_back(SelectionEvent::Submitted(submission.clone()));
        submission
    }

    /// Run an action; returns the submission when the action was `Submit`
    pub fn apply(&mut self, action: SelectorAction) -> Option<Submission> {
        match action {
            SelectorAction::CursorUp => self.move_cursor(-1),
            SelectorAction::CursorDown => self.move_cursor(1),
            SelectorAction::ToggleMark => {
                self.toggle_mark();
            }
            SelectorAction::ToggleExclude => {
                self.toggle_exclude_visibility();
            }
            SelectorAction::Submit => return Some(self.submit()),
        }
        None
    }

    /// Whether an action can currently do anything
    #[must_use]
    pub fn is_available(&self, action: SelectorAction) -> bool {
        match action {
            SelectorAction::ToggleMark => self.multi_select,
            SelectorAction::ToggleExclude => !self.excluded.is_empty(),
            SelectorAction::CursorUp | SelectorAction::CursorDown | SelectorAction::Submit => true,
        }
    }

    /// Drain queued events, oldest first
    pub fn take_events(&mut self) -> Vec<SelectionEvent> {
        self.events.drain(..).collect()
    }

    /// Visible cases, in case-set order
    pub fn visible(&self) -> impl Iterator<Item = &Case> {
        self.visible
            .iter()
            .filter_map(|&position| self.cases.get_index(position).map(|(_, case)| case))
    }

    /// Number of visible cases
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Cursor index into the visible list
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Current query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether `id` is marked
    #[must_use]
    pub fn is_marked(&self, id: &str) -> bool {
        self.multi_select && self.marked.contains(id)
    }

    /// Number of marked cases
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Whether `id` is in the exclude set
    #[must_use]
    pub fn is_excluded(&self, id: &str) -> bool {
        self.excluded.contains(id)
    }

    /// Whether the engine runs in multi-select mode
    #[must_use]
    pub const fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    /// Whether excluded cases are currently hidden
    #[must_use]
    pub const fn excluded_hidden(&self) -> bool {
        self.excluded_hidden
    }

    /// Total number of cases
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the case set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    fn is_hidden(&self, id: &str) -> bool {
        self.excluded_hidden && self.excluded.contains(id)
    }

    fn compute_visible(&self) -> Vec<usize> {
        let scorer = (!self.query.is_empty()).then(|| QueryScorer::new(&self.query));
        self.cases
            .values()
            .enumerate()
            .filter(|(_, case)| !self.is_hidden(&case.id))
            .filter(|(_, case)| scorer.as_ref().is_none_or(|s| s.matches(case)))
            .map(|(position, _)| position)
            .collect()
    }

    /// Recompute the visible list and rebind the cursor by case identity
    fn refresh(&mut self) {
        let previous = self
            .cursor
            .and_then(|cursor| self.visible.get(cursor).copied());
        let visible = self.compute_visible();
        let cursor = previous
            .and_then(|position| visible.iter().position(|&p| p == position))
            .or_else(|| (!visible.is_empty()).then_some(0));

        self.visible = visible;
        self.cursor = cursor;
        debug!(
            query = %self.query,
            visible = self.visible.len(),
            cursor = ?self.cursor,
            "recomputed visible cases"
        );
        self.notify_changed();
    }

    fn notify_changed(&mut self) {
        let current = self.current_selection().cloned();
        self.events.push_back(SelectionEvent::Changed(current));
    }
}
