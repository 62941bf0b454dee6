//! Error types for env-file loading.
//!
//! Responsibilities:
//! - Define the error variants surfaced by `EnvFileLoader::load`.
//!
//! Does NOT handle:
//! - Malformed lines (tolerated and skipped, see `parser.rs`).
//! - Missing files (an expected case, reported as success, see `loader.rs`).
//!
//! Invariants:
//! - Errors carry the file path and the `io::ErrorKind` only, NEVER file
//!   contents. Env files routinely hold secrets and error messages end up
//!   in logs.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an env file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file exists but could not be read (permission denied, is a
    /// directory, I/O fault).
    #[error("env file at {path} exists but could not be read: {kind}")]
    Unreadable { path: PathBuf, kind: ErrorKind },
}
