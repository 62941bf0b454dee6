//! Command implementations.
//!
//! Responsibilities:
//! - Execute the `get` and `list` subcommands against the process
//!   environment.
//!
//! Invariants:
//! - Values go to stdout; diagnostics go to stderr via tracing/anyhow.
//! - The env file is loaded before any variable is read, so ambient
//!   deployment values always win over file defaults.

use std::collections::BTreeMap;

use anyhow::{Context, bail};
use envseed_loader::{EnvFileLoader, EnvTable, ProcessEnv};

/// Load the env file, then print the named variable's value.
pub fn run_get(loader: &EnvFileLoader, name: &str, default: Option<&str>) -> anyhow::Result<()> {
    let mut table = ProcessEnv::new();
    loader
        .load(&mut table)
        .with_context(|| format!("failed to load env file {}", loader.path().display()))?;

    match table.get(name).or_else(|| default.map(str::to_string)) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!("environment variable '{name}' is not set"),
    }
}

/// Load the env file and print every entry it defines, sorted by name.
pub fn run_list(loader: &EnvFileLoader, json: bool) -> anyhow::Result<()> {
    let mut table = ProcessEnv::new();
    let parsed = loader
        .load(&mut table)
        .with_context(|| format!("failed to load env file {}", loader.path().display()))?;

    // BTreeMap for stable output ordering.
    let sorted: BTreeMap<String, String> = parsed.into_iter().collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&sorted)?);
    } else {
        for (name, value) in &sorted {
            println!("{name}={value}");
        }
    }
    Ok(())
}
