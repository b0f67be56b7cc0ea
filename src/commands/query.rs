//! Query command - pick a case to jump into

use crate::cases::{Case, CaseRepo};
use crate::selector::{SelectionEngine, SelectorConfig};
use crate::ui::{CasePicker, PickOutcome};
use crate::KaseError;
use tracing::info;

type Result<T> = std::result::Result<T, KaseError>;

/// Run the single-select picker over every case in the store
///
/// Returns `None` when the user aborts or submits with nothing highlighted.
///
/// # Errors
/// Returns an error if the store cannot be read or the picker fails.
pub fn execute(repo: &CaseRepo, picker: &impl CasePicker, prompt: &str) -> Result<Option<Case>> {
    let cases = repo.load()?;
    let mut engine = SelectionEngine::new(SelectorConfig::new(cases).with_initial_query(prompt));

    let chosen = match picker.pick(&mut engine)? {
        PickOutcome::Submitted(submission) => submission.into_cases().into_iter().next(),
        PickOutcome::Aborted => None,
    };

    match &chosen {
        Some(case) => info!(id = %case.id, "selected case"),
        None => info!("no case selected"),
    }
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::SelectorAction;
    use crate::testing::TempCaseDir;
    use crate::ui::mock::{MockPicker, MockStep};

    fn store() -> TempCaseDir {
        let dir = TempCaseDir::new();
        dir.write_case("1234", "First Test Case", "First description", "LP#1111");
        dir.write_case("5678", "Second Test Case", "Second description", "LP#2222");
        dir.write_case("9999", "Python Related Case", "Testing Python functionality", "");
        dir
    }

    #[test]
    fn test_query_returns_case_directory() {
        let dir = store();
        let picker = MockPicker::new(vec![
            MockStep::Action(SelectorAction::CursorDown),
            MockStep::Action(SelectorAction::Submit),
        ]);
        let case = execute(&dir.repo(), &picker, "").unwrap().unwrap();
        assert_eq!(case.id, "5678");
        assert_eq!(case.path, dir.path().join("5678"));
    }

    #[test]
    fn test_initial_prompt_filters() {
        let dir = store();
        let case = execute(&dir.repo(), &MockPicker::submit(), "Python")
            .unwrap()
            .unwrap();
        assert_eq!(case.id, "9999");
    }

    #[test]
    fn test_abort_returns_none() {
        let dir = store();
        assert!(execute(&dir.repo(), &MockPicker::aborted(), "").unwrap().is_none());
    }

    #[test]
    fn test_empty_store_submits_nothing() {
        let dir = TempCaseDir::new();
        assert!(execute(&dir.repo(), &MockPicker::submit(), "").unwrap().is_none());
    }
}
