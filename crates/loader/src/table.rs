//! Environment table abstraction.
//!
//! Responsibilities:
//! - Define the `EnvTable` seam the loader merges parsed entries into.
//! - Provide `ProcessEnv` (the real process environment) and `MemoryEnv`
//!   (an isolated in-memory table for tests and embedding).
//!
//! Does NOT handle:
//! - Parsing or file I/O (see `parser.rs` and `loader.rs`).
//!
//! Invariants:
//! - `ProcessEnv` serializes writes behind a process-wide mutex so
//!   concurrent startup paths cannot interleave mutations of the global
//!   environment.

use std::collections::HashMap;
use std::sync::Mutex;

/// A mapping of variable names to string values.
///
/// The loader only ever appends missing entries; callers that need
/// file-wins semantics do not exist in this system.
pub trait EnvTable {
    /// Look up a variable's value.
    fn get(&self, name: &str) -> Option<String>;

    /// Whether the variable is present, even with an empty value.
    fn contains(&self, name: &str) -> bool;

    /// Insert or replace a variable.
    fn set(&mut self, name: &str, value: &str);
}

static PROCESS_ENV_LOCK: Mutex<()> = Mutex::new(());

/// The process-wide environment table the host pre-populates before the
/// loader runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvTable for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn contains(&self, name: &str) -> bool {
        // var_os so presence is detected even for empty or non-unicode
        // values.
        std::env::var_os(name).is_some()
    }

    fn set(&mut self, name: &str, value: &str) {
        let _guard = PROCESS_ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // SAFETY: mutations of the process environment are serialized by
        // PROCESS_ENV_LOCK, and loading happens once at startup before
        // worker threads exist.
        unsafe {
            std::env::set_var(name, value);
        }
    }
}

/// An isolated in-memory environment table.
///
/// Tests supply this instead of mutating real process state, per the
/// load-once design of the process table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the table's entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, String)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl EnvTable for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }
}
