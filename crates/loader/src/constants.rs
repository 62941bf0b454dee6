//! Centralized defaults for the envseed workspace.

/// File name probed in the current working directory when no explicit path
/// is configured.
pub const DEFAULT_ENV_FILENAME: &str = ".env";
