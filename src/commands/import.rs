//! Import command - create cases from a Salesforce export

use crate::cases::CaseRepo;
use crate::importer::{self, SalesforceCsv};
use crate::selector::{SelectionEngine, SelectorConfig};
use crate::ui::{CasePicker, PickOutcome};
use crate::KaseError;
use indexmap::IndexMap;
use tracing::info;

type Result<T> = std::result::Result<T, KaseError>;

/// Let the user mark cases from the export and write the marked ones
///
/// Cases already present in the store start hidden. Returns the number of
/// cases written; aborting writes nothing.
///
/// # Errors
/// Returns an error if the export is invalid, the store cannot be read or
/// written, or the picker fails.
pub fn execute(
    export: &SalesforceCsv,
    repo: &CaseRepo,
    picker: &impl CasePicker,
    prompt: &str,
) -> Result<usize> {
    let cases: IndexMap<_, _> = export
        .cases()?
        .into_iter()
        .map(|case| (case.id.clone(), case))
        .collect();
    let existing = repo.existing_ids()?;
    info!(
        file = %export.csv_file().display(),
        rows = cases.len(),
        existing = existing.len(),
        "loaded export"
    );

    let mut engine = SelectionEngine::new(
        SelectorConfig::new(cases)
            .with_multi_select(true)
            .with_excluded(existing)
            .with_initial_query(prompt),
    );

    match picker.pick(&mut engine)? {
        PickOutcome::Submitted(submission) => {
            Ok(importer::import(&submission.into_cases(), repo)?)
        }
        PickOutcome::Aborted => Ok(0),
    }
}
