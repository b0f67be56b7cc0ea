//! Salesforce report import
//!
//! Reads a CSV export of a Salesforce case report and turns each row into a
//! [`Case`] rooted under the case directory. Nothing touches the store until
//! [`import`] is called with the cases the user picked.

mod error;

pub use error::ImportError;

use crate::cases::{Case, CaseRepo};
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result type for import operations
pub type Result<T> = std::result::Result<T, ImportError>;

/// Columns every export must carry
pub const REQUIRED_COLUMNS: [&str; 3] = ["Case Number", "Subject", "Description"];

/// A Salesforce CSV export bound to a destination case directory
#[derive(Debug, Clone)]
pub struct SalesforceCsv {
    csv_file: PathBuf,
    case_dir: PathBuf,
}

impl SalesforceCsv {
    #[must_use]
    pub fn new(csv_file: impl Into<PathBuf>, case_dir: impl Into<PathBuf>) -> Self {
        Self {
            csv_file: csv_file.into(),
            case_dir: case_dir.into(),
        }
    }

    #[must_use]
    pub fn csv_file(&self) -> &Path {
        &self.csv_file
    }

    /// Parse and validate every row
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the header row is absent
    /// or lacks a required column, or any row has a blank required value.
    /// Row numbers count the header as line 1.
    pub fn cases(&self) -> Result<Vec<Case>> {
        let file = File::open(&self.csv_file).map_err(|source| ImportError::Open {
            path: self.csv_file.clone(),
            source,
        })?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let columns = header_columns(rdr.headers()?)?;

        let mut cases = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let [id, title, desc] = validate_row(&record, &columns, i + 2)?;
            let path = self.case_dir.join(&id);
            cases.push(Case::new(id, title, desc, path));
        }

        debug!(file = %self.csv_file.display(), count = cases.len(), "parsed export");
        Ok(cases)
    }
}

/// Locate the required columns in the header row
fn header_columns(headers: &csv::StringRecord) -> Result<[usize; 3]> {
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ImportError::MissingHeader);
    }

    let index: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name, i))
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !index.contains_key(*column))
        .map(|column| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing));
    }

    Ok(REQUIRED_COLUMNS.map(|column| index[column]))
}

fn validate_row(
    record: &csv::StringRecord,
    columns: &[usize; 3],
    line: usize,
) -> Result<[String; 3]> {
    let values = columns.map(|i| record.get(i).unwrap_or_default().trim().to_string());

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .zip(&values)
        .filter(|(_, value)| value.is_empty())
        .map(|(column, _)| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingValues {
            line,
            columns: missing,
        });
    }
    Ok(values)
}

/// Write the chosen cases into the store
///
/// Cases that already have a `case.json` are left untouched. Returns the
/// number of cases written.
///
/// # Errors
///
/// Returns an error if a case directory or metadata file cannot be written.
pub fn import(cases: &[Case], repo: &CaseRepo) -> Result<usize> {
    let mut written = 0;
    for case in cases {
        let case = Case {
            path: repo.case_path(&case.id),
            ..case.clone()
        };
        if case.metadata_path().exists() {
            debug!(id = %case.id, "skipping existing case");
            continue;
        }
        repo.add_case(&case)?;
        written += 1;
    }
    info!(written, skipped = cases.len() - written, "imported cases");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TempCaseDir;
    use std::fs;

    fn export(dir: &TempCaseDir, contents: &str) -> PathBuf {
        let path = dir.path().join("report.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parses_rows_in_order() {
        let dir = TempCaseDir::new();
        let csv = export(
            &dir,
            "Case Number,Subject,Description,Owner\n\
             0001,First subject,First body,alice\n\
             0002,  Second subject  ,\"Multi, comma body\",bob\n",
        );

        let cases = SalesforceCsv::new(csv, "/cases").cases().unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].id, "0001");
        assert_eq!(cases[0].path, PathBuf::from("/cases/0001"));
        assert_eq!(cases[1].title, "Second subject");
        assert_eq!(cases[1].desc, "Multi, comma body");
        assert_eq!(cases[1].lp, "");
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let dir = TempCaseDir::new();
        let csv = export(&dir, "Description,Case Number,Subject\nbody,42,title\n");
        let cases = SalesforceCsv::new(csv, "/cases").cases().unwrap();
        assert_eq!(cases[0].id, "42");
        assert_eq!(cases[0].title, "title");
        assert_eq!(cases[0].desc, "body");
    }

    #[test]
    fn test_empty_file_has_no_header() {
        let dir = TempCaseDir::new();
        let csv = export(&dir, "");
        let err = SalesforceCsv::new(csv, "/cases").cases().unwrap_err();
        assert!(matches!(err, ImportError::MissingHeader));
    }

    #[test]
    fn test_missing_columns_are_named() {
        let dir = TempCaseDir::new();
        let csv = export(&dir, "Case Number,Owner\n1,alice\n");
        let err = SalesforceCsv::new(csv, "/cases").cases().unwrap_err();
        match err {
            ImportError::MissingColumns(columns) => {
                assert_eq!(columns, vec!["Subject", "Description"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_values_report_line_number() {
        let dir = TempCaseDir::new();
        let csv = export(
            &dir,
            "Case Number,Subject,Description\n1,ok,ok\n2,   ,\n",
        );
        let err = SalesforceCsv::new(csv, "/cases").cases().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 3 is missing value(s) for: Subject, Description"
        );
    }

    #[test]
    fn test_short_row_counts_as_missing() {
        let dir = TempCaseDir::new();
        let csv = export(&dir, "Case Number,Subject,Description\n7,only subject\n");
        let err = SalesforceCsv::new(csv, "/cases").cases().unwrap_err();
        assert!(matches!(
            err,
            ImportError::MissingValues { line: 2, ref columns } if columns == &["Description"]
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = SalesforceCsv::new("/nonexistent/report.csv", "/cases")
            .cases()
            .unwrap_err();
        assert!(matches!(err, ImportError::Open { .. }));
    }

    #[test]
    fn test_import_skips_existing_cases() {
        let dir = TempCaseDir::new();
        dir.write_case("0001", "Already here", "keep me", "LP#1");
        let repo = dir.repo();

        let cases = vec![
            Case::new("0001", "Imported", "overwrite?", dir.path().join("0001")),
            Case::new("0002", "New", "fresh", dir.path().join("0002")),
        ];
        assert_eq!(import(&cases, &repo).unwrap(), 1);

        let loaded = repo.load().unwrap();
        assert_eq!(loaded["0001"].title, "Already here");
        assert_eq!(loaded["0002"].title, "New");
        assert_eq!(import(&cases, &repo).unwrap(), 0);
    }
}
