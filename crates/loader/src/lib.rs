//! Env-file loading for envseed.
//!
//! This crate provides a parser for flat `KEY=VALUE` environment files and a
//! loader that merges parsed entries into an environment table without
//! overwriting variables the surrounding execution environment already set.

mod constants;
mod error;
mod loader;
mod parser;
mod table;

pub use constants::DEFAULT_ENV_FILENAME;
pub use error::LoadError;
pub use loader::EnvFileLoader;
pub use parser::{ConfigEntry, parse_str};
pub use table::{EnvTable, MemoryEnv, ProcessEnv};
