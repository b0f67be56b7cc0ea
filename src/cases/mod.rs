//! Flat-file case store
//!
//! Every case lives in its own directory under the case root and is
//! described by a `case.json` metadata file:
//!
//! ```text
//! ~/cases/
//! ├── 01234567/
//! │   ├── case.json      {"sf": "01234567", "title": "...", "desc": "...", "lp": "..."}
//! │   └── notes.md
//! └── 07654321/
//!     └── case.json
//! ```
//!
//! The directory holding `case.json` is the case's location; it is never
//! written into the metadata itself.

mod error;

pub use error::CaseError;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info, warn};

/// Result type for case store operations
pub type Result<T> = std::result::Result<T, CaseError>;

/// Name of the metadata file inside each case directory
pub const METADATA_FILE: &str = "case.json";

/// Pattern accepted by [`CaseRepo::create_case`]: `[<id>] <title>`
pub static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?P<sf>[^\]]+)\]\s+(?P<title>.+)$").expect("title pattern is valid")
});

/// A single tracked case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Support ticket number, unique within a store
    #[serde(rename = "sf")]
    pub id: String,
    /// One-line summary
    pub title: String,
    /// Free-text description
    pub desc: String,
    /// Optional bug reference (empty when unset)
    #[serde(default)]
    pub lp: String,
    /// Case directory; derived from where `case.json` lives
    #[serde(skip)]
    pub path: PathBuf,
}

impl Case {
    /// Create a case without a bug reference
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        desc: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            desc: desc.into(),
            lp: String::new(),
            path: path.into(),
        }
    }

    /// Attach a bug reference
    #[must_use]
    pub fn with_lp(mut self, lp: impl Into<String>) -> Self {
        self.lp = lp.into();
        self
    }

    /// Path of this case's metadata file
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_FILE)
    }

    /// Markdown preview shown next to the case list
    #[must_use]
    pub fn preview(&self) -> String {
        let mut preview = format!("# [{}] {}\n\n{}", self.id, self.title, self.desc);
        if !self.lp.is_empty() {
            preview.push_str(&format!("\n\nLP: {}", self.lp));
        }
        preview
    }

    /// Write `case.json` into the case directory
    ///
    /// The directory itself must already exist.
    ///
    /// # Errors
    ///
    /// Returns `CaseError` if serialization or the write fails.
    pub fn write_metadata(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(self.metadata_path(), json)?;
        debug!(id = %self.id, path = %self.path.display(), "wrote case metadata");
        Ok(())
    }
}

/// Expand a leading `~` to the user's home directory
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Directory-backed case store
#[derive(Debug, Clone)]
pub struct CaseRepo {
    case_dir: PathBuf,
}

impl CaseRepo {
    /// Open a store rooted at `case_dir` (a leading `~` is expanded)
    #[must_use]
    pub fn new(case_dir: &str) -> Self {
        Self {
            case_dir: expand_tilde(case_dir),
        }
    }

    /// Root directory of the store
    #[must_use]
    pub fn case_dir(&self) -> &Path {
        &self.case_dir
    }

    /// All `case.json` files directly below the root, sorted by path
    ///
    /// # Errors
    ///
    /// Returns `CaseError::Pattern` if the root cannot be turned into a glob.
    pub fn metadata_files(&self) -> Result<Vec<PathBuf>> {
        let root = glob::Pattern::escape(&self.case_dir.to_string_lossy());
        let pattern = format!("{root}/*/{METADATA_FILE}");
        let mut files: Vec<PathBuf> = glob::glob(&pattern)?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable case entry");
                    None
                }
            })
            .collect();
        files.sort();
        Ok(files)
    }

    /// Load one metadata file; the case path is the file's parent directory
    ///
    /// # Errors
    ///
    /// Returns `CaseError` if the file cannot be read or parsed.
    pub fn load_meta(meta: &Path) -> Result<Case> {
        let content = fs::read_to_string(meta)?;
        let mut case: Case =
            serde_json::from_str(&content).map_err(|source| CaseError::Parse {
                path: meta.to_path_buf(),
                source,
            })?;
        case.path = meta.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(case)
    }

    /// Load every case in store order, keyed by case id
    ///
    /// Unparseable metadata files are logged and skipped so one broken case
    /// does not hide the rest. When two directories claim the same id the
    /// first one wins.
    ///
    /// # Errors
    ///
    /// Returns `CaseError` if the store root cannot be listed.
    pub fn load(&self) -> Result<IndexMap<String, Case>> {
        let mut cases = IndexMap::new();
        for meta in self.metadata_files()? {
            match Self::load_meta(&meta) {
                Ok(case) => {
                    if cases.contains_key(&case.id) {
                        warn!(id = %case.id, path = %meta.display(), "duplicate case id, ignoring");
                        continue;
                    }
                    cases.insert(case.id.clone(), case);
                }
                Err(e) => warn!(error = %e, "skipping case"),
            }
        }
        info!(count = cases.len(), dir = %self.case_dir.display(), "loaded cases");
        Ok(cases)
    }

    /// Ids of every case already in the store
    ///
    /// # Errors
    ///
    /// Returns `CaseError` if the store cannot be loaded.
    pub fn existing_ids(&self) -> Result<std::collections::HashSet<String>> {
        Ok(self.load()?.into_keys().collect())
    }

    /// Where a case with this id lives
    #[must_use]
    pub fn case_path(&self, id: &str) -> PathBuf {
        self.case_dir.join(id)
    }

    /// Create a new case from a `[<id>] <title>` name
    ///
    /// The case directory is created when missing. An existing `case.json`
    /// is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns `CaseError::InvalidName` for a malformed name,
    /// `CaseError::AlreadyExists` if the case already has metadata, or an
    /// I/O error if writing fails.
    pub fn create_case(&self, name: &str, lp: &str, description: &str) -> Result<Case> {
        let captures = TITLE_RE
            .captures(name.trim())
            .ok_or_else(|| CaseError::InvalidName(name.to_string()))?;
        let id = captures["sf"].trim().to_string();
        let title = captures["title"].trim().to_string();

        let path = self.case_path(&id);
        let case = Case::new(id, title, description, path).with_lp(lp.trim());
        self.add_case(&case)?;
        Ok(case)
    }

    /// Persist an already-built case into the store
    ///
    /// # Errors
    ///
    /// Returns `CaseError::AlreadyExists` if the case already has metadata,
    /// or an I/O error if writing fails.
    pub fn add_case(&self, case: &Case) -> Result<()> {
        if case.metadata_path().exists() {
            return Err(CaseError::AlreadyExists {
                id: case.id.clone(),
                path: case.path.clone(),
            });
        }
        fs::create_dir_all(&case.path)?;
        case.write_metadata()?;
        info!(id = %case.id, "created case");
        Ok(())
    }
}
