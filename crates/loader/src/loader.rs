//! Env-file loader.
//!
//! Responsibilities:
//! - Locate the env file (explicit path or `./.env`), read it, and merge
//!   parsed assignments into an environment table.
//! - Report every parsed name/value pair back to the caller for
//!   observability.
//!
//! Does NOT handle:
//! - Line parsing (see `parser.rs`).
//! - Consuming the loaded variables (downstream code reads the table).
//!
//! Invariants:
//! - A variable already present in the table is never overwritten; ambient
//!   deployment configuration takes precedence over file-based defaults.
//! - A missing file is success with an empty mapping, not an error.
//! - Within one file, the first occurrence of a duplicated name wins.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_ENV_FILENAME;
use crate::error::LoadError;
use crate::parser::parse_str;
use crate::table::EnvTable;

/// Reads an env file and merges its assignments into an environment table
/// under the no-override rule.
#[derive(Debug, Default, Clone)]
pub struct EnvFileLoader {
    path: Option<PathBuf>,
}

impl EnvFileLoader {
    /// Create a loader that probes `./.env`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit file path instead of the default filename.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// The path the loader will read.
    pub fn path(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_ENV_FILENAME))
    }

    /// Load the env file into `table`.
    ///
    /// Returns a mapping of every name that was parsed, regardless of
    /// whether it was applied or retained its pre-existing table value. A
    /// missing file yields `Ok` with an empty mapping and leaves the table
    /// untouched.
    pub fn load(
        &self,
        table: &mut dyn EnvTable,
    ) -> Result<HashMap<String, String>, LoadError> {
        let path = self.path();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no env file, nothing to load");
                return Ok(HashMap::new());
            }
            Err(e) => {
                return Err(LoadError::Unreadable {
                    path: path.to_path_buf(),
                    kind: e.kind(),
                });
            }
        };

        let mut parsed = HashMap::new();
        for entry in parse_str(&content) {
            if parsed.contains_key(&entry.name) {
                tracing::debug!(name = %entry.name, "duplicate assignment, first occurrence wins");
                continue;
            }
            if table.contains(&entry.name) {
                tracing::debug!(name = %entry.name, "ambient value retained");
            } else {
                table.set(&entry.name, &entry.value);
                tracing::debug!(name = %entry.name, "applied from env file");
            }
            parsed.insert(entry.name, entry.value);
        }

        tracing::debug!(path = %path.display(), count = parsed.len(), "env file loaded");
        Ok(parsed)
    }
}
