//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Load variables from an env file and read them back.
#[derive(Parser, Debug)]
#[command(name = "envseed", version, about)]
pub struct Cli {
    /// Env file to load instead of ./.env
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the env file, then print one variable's value
    Get {
        /// Variable name to read
        name: String,

        /// Value to print when the variable is not set anywhere
        #[arg(long, value_name = "VALUE")]
        default: Option<String>,
    },

    /// Load the env file and print every entry it defines
    List {
        /// Print the parsed entries as a JSON object
        #[arg(long)]
        json: bool,
    },
}
