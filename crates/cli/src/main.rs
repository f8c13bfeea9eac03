// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! shopqa binary entry point.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shopqa::cli::Cli;
use shopqa::output::print_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let stdout = io::stdout();
    match shopqa::run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr. `-v` flags take precedence over `RUST_LOG`; with
/// neither, only warnings are shown.
fn init_logging(cli: &Cli) {
    let filter = match cli.log_directive() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}
