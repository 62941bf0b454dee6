//! envseed - load variables from an env file and read them back.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load the env file into the process environment (no-override), then
//!   dispatch to the requested subcommand.
//!
//! Does NOT handle:
//! - Env-file parsing or merge semantics (see `envseed-loader`).
//!
//! Invariants:
//! - The env file is loaded inside each command, before any variable read.
//! - Diagnostics go to stderr so stdout stays clean for scripted use.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use envseed_loader::EnvFileLoader;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let loader = match cli.file {
        Some(path) => EnvFileLoader::new().with_path(path),
        None => EnvFileLoader::new(),
    };
    tracing::debug!(path = %loader.path().display(), "using env file");

    let result = match cli.command {
        Commands::Get { name, default } => {
            commands::run_get(&loader, &name, default.as_deref())
        }
        Commands::List { json } => commands::run_list(&loader, json),
    };

    let exit_code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::GeneralError
        }
    };

    std::process::exit(exit_code.as_i32());
}
