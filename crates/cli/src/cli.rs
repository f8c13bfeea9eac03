// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Group shop source files into feature buckets
#[derive(Parser, Debug)]
#[command(name = "shopqa", version, about = "Group shop source files into feature buckets")]
pub struct Cli {
    /// Feature catalog TOML file (defaults to the built-in catalog)
    #[arg(long, global = true, env = "SHOPQA_CATALOG", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the feature each path belongs to
    Classify {
        /// Paths to classify; they need not exist
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
    },

    /// List features in priority order
    List,

    /// Show one feature by name
    Show {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Walk a directory and count files per feature
    Scan {
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Also print every file under its feature
        #[arg(long)]
        files: bool,
    },

    /// Print the active catalog as TOML, a starting point for --catalog
    Export,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Default log filter implied by `-v` flags; `None` defers to `RUST_LOG`.
    pub fn log_directive(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
