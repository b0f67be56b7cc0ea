//! Testing utilities for kase
//!
//! Provides a `TempCaseDir` wrapper for throwaway case stores and a few
//! record builders shared by the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::cases::{Case, CaseRepo, METADATA_FILE};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary case store that is removed on drop
pub struct TempCaseDir {
    dir: TempDir,
}

impl TempCaseDir {
    /// Create an empty case store in a fresh temp directory
    ///
    /// # Panics
    /// Panics if the temp directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp case dir"),
        }
    }

    /// Root of the store
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A repo pointing at this store
    #[must_use]
    pub fn repo(&self) -> CaseRepo {
        CaseRepo::new(&self.path().to_string_lossy())
    }

    /// Write a raw `case.json` for `id`
    ///
    /// # Panics
    /// Panics if the case cannot be written.
    pub fn write_case(&self, id: &str, title: &str, desc: &str, lp: &str) {
        let case_dir = self.path().join(id);
        fs::create_dir_all(&case_dir).expect("Failed to create case dir");
        let json = serde_json::json!({ "sf": id, "title": title, "desc": desc, "lp": lp });
        fs::write(case_dir.join(METADATA_FILE), json.to_string()).expect("Failed to write case");
    }
}

impl Default for TempCaseDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an in-memory case rooted at `/cases/<id>`
#[must_use]
pub fn case(id: &str, title: &str, desc: &str, lp: &str) -> Case {
    Case::new(id, title, desc, format!("/cases/{id}")).with_lp(lp)
}

/// Collect cases into an id-keyed map, preserving order
#[must_use]
pub fn case_map(cases: impl IntoIterator<Item = Case>) -> IndexMap<String, Case> {
    cases.into_iter().map(|c| (c.id.clone(), c)).collect()
}

/// The three-case fixture used by the picker scenarios
#[must_use]
pub fn small_case_set() -> IndexMap<String, Case> {
    case_map([
        case("1234", "First Test Case", "First description", "LP#1111"),
        case("5678", "Second Test Case", "Second description", "LP#2222"),
        case("9999", "Python Related Case", "Testing Python functionality", ""),
    ])
}
