//! Init command - create a new case

use crate::cases::{Case, CaseRepo};
use crate::ui::UserInput;
use crate::KaseError;

type Result<T> = std::result::Result<T, KaseError>;

/// Create a case, prompting for anything not given on the command line
///
/// # Errors
/// Returns an error if a prompt fails, the name is not `[id] Title`, or the
/// case already exists.
pub fn execute(
    repo: &CaseRepo,
    input: &impl UserInput,
    name: Option<String>,
    lp: Option<String>,
    description: Option<String>,
) -> Result<Case> {
    let name = match name {
        Some(name) => name,
        None => input.prompt_text("Case name ([1234] Example Case Title)", false)?,
    };
    let lp = match lp {
        Some(lp) => lp,
        None => input.prompt_text("LP bug (optional)", true)?,
    };
    let description = match description {
        Some(description) => description,
        None => input.prompt_text("Description", true)?,
    };

    Ok(repo.create_case(&name, lp.trim(), &description)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::CaseError;
    use crate::testing::TempCaseDir;
    use crate::ui::input::ScriptedInput;

    #[test]
    fn test_init_from_flags_does_not_prompt() {
        let dir = TempCaseDir::new();
        let input = ScriptedInput::default();
        let case = execute(
            &dir.repo(),
            &input,
            Some("[1234] Broken boot".into()),
            Some("LP#42".into()),
            Some("Fails after upgrade".into()),
        )
        .unwrap();

        assert_eq!(case.id, "1234");
        assert_eq!(case.lp, "LP#42");
        assert!(dir.path().join("1234").join("case.json").exists());
    }

    #[test]
    fn test_init_prompts_for_missing_values() {
        let dir = TempCaseDir::new();
        let input = ScriptedInput::new(["[5678] Slow disk", " ", "iostat attached"]);
        let case = execute(&dir.repo(), &input, None, None, None).unwrap();

        assert_eq!(case.title, "Slow disk");
        assert_eq!(case.lp, "");
        assert_eq!(case.desc, "iostat attached");
    }

    #[test]
    fn test_init_rejects_bad_name() {
        let dir = TempCaseDir::new();
        let err = execute(
            &dir.repo(),
            &ScriptedInput::default(),
            Some("no brackets".into()),
            Some(String::new()),
            Some(String::new()),
        )
        .unwrap_err();
        assert!(matches!(err, KaseError::Case(CaseError::InvalidName(_))));
    }

    #[test]
    fn test_init_never_overwrites() {
        let dir = TempCaseDir::new();
        dir.write_case("1234", "Original", "keep", "");
        let err = execute(
            &dir.repo(),
            &ScriptedInput::default(),
            Some("[1234] Replacement".into()),
            Some(String::new()),
            Some(String::new()),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            KaseError::Case(CaseError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn test_init_blank_name_prompt_is_required() {
        let dir = TempCaseDir::new();
        let err = execute(&dir.repo(), &ScriptedInput::new([""]), None, None, None).unwrap_err();
        assert!(matches!(err, KaseError::Ui(_)));
    }
}
