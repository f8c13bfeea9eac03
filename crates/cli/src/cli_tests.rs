// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("shopqa").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_classify_collects_paths() {
    let cli = parse(&["classify", "src/app/admin/page.ts", "README.md"]);
    assert_eq!(
        cli.command,
        Command::Classify {
            paths: vec!["src/app/admin/page.ts".into(), "README.md".into()],
        }
    );
    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!(cli.catalog, None);
}

#[test]
fn test_classify_requires_a_path() {
    assert!(Cli::try_parse_from(["shopqa", "classify"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&["list", "--format", "json", "--catalog", "features.toml", "-vv"]);
    assert_eq!(cli.command, Command::List);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.catalog, Some(PathBuf::from("features.toml")));
    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_scan_flags() {
    let cli = parse(&["scan", "src", "--files"]);
    assert_eq!(
        cli.command,
        Command::Scan {
            dir: PathBuf::from("src"),
            files: true,
        }
    );
}

#[test]
fn test_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["shopqa", "--format", "yaml", "list"]).is_err());
}

#[parameterized(
    quiet = { &["list"], None },
    debug = { &["-v", "list"], Some("debug") },
    trace = { &["-vv", "list"], Some("trace") },
    very_trace = { &["-vvvv", "list"], Some("trace") },
)]
fn test_log_directive(args: &[&str], expected: Option<&str>) {
    assert_eq!(parse(args).log_directive(), expected);
}

#[test]
fn test_command_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
