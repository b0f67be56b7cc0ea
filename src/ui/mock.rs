//! Scripted picker for testing

use super::error::Result;
use super::traits::{CasePicker, PickOutcome};
use crate::selector::{SelectionEngine, SelectorAction};

/// One scripted user step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockStep {
    /// Type a query and let the debounce settle
    Query(String),
    /// Trigger a bound action
    Action(SelectorAction),
    /// Press escape
    Abort,
}

/// Picker that replays a fixed script against the engine
///
/// A script that runs out without submitting counts as aborted.
#[derive(Debug, Clone, Default)]
pub struct MockPicker {
    steps: Vec<MockStep>,
}

impl MockPicker {
    #[must_use]
    pub const fn new(steps: Vec<MockStep>) -> Self {
        Self { steps }
    }

    /// Submit whatever is highlighted initially
    #[must_use]
    pub fn submit() -> Self {
        Self::new(vec![MockStep::Action(SelectorAction::Submit)])
    }

    /// Abort immediately
    #[must_use]
    pub fn aborted() -> Self {
        Self::new(vec![MockStep::Abort])
    }
}

impl CasePicker for MockPicker {
    fn pick(&self, engine: &mut SelectionEngine) -> Result<PickOutcome> {
        for step in &self.steps {
            match step {
                MockStep::Query(query) => engine.set_filter(query.as_str()),
                MockStep::Action(action) => {
                    if !engine.is_available(*action) {
                        continue;
                    }
                    if let Some(submission) = engine.apply(*action) {
                        return Ok(PickOutcome::Submitted(submission));
                    }
                }
                MockStep::Abort => return Ok(PickOutcome::Aborted),
            }
        }
        Ok(PickOutcome::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{SelectorConfig, Submission};
    use crate::testing::small_case_set;

    fn engine() -> SelectionEngine {
        SelectionEngine::new(SelectorConfig::new(small_case_set()))
    }

    #[test]
    fn test_mock_picker_submit() {
        let outcome = MockPicker::submit().pick(&mut engine()).unwrap();
        let submission = outcome.submission().unwrap();
        assert_eq!(submission.into_cases()[0].id, "1234");
    }

    #[test]
    fn test_mock_picker_aborted() {
        let outcome = MockPicker::aborted().pick(&mut engine()).unwrap();
        assert_eq!(outcome, PickOutcome::Aborted);
    }

    #[test]
    fn test_mock_picker_empty_script_aborts() {
        let outcome = MockPicker::default().pick(&mut engine()).unwrap();
        assert!(outcome.submission().is_none());
    }

    #[test]
    fn test_mock_picker_skips_unavailable_actions() {
        let picker = MockPicker::new(vec![
            MockStep::Query("Python".into()),
            MockStep::Action(SelectorAction::ToggleMark),
            MockStep::Action(SelectorAction::Submit),
        ]);
        let mut engine = engine();
        let outcome = picker.pick(&mut engine).unwrap();
        assert_eq!(engine.marked_count(), 0);
        assert_eq!(
            outcome,
            PickOutcome::Submitted(Submission::Single(Some(small_case_set()["9999"].clone())))
        );
    }
}
