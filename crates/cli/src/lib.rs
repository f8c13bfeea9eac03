// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `shopqa` command-line tool.
//!
//! Classifies shop source paths into feature buckets using either the
//! built-in catalog or a TOML catalog file, and scans source trees to
//! compare per-feature file counts against catalog estimates.

pub mod cli;
pub mod error;
pub mod output;
pub mod scan;

use std::io::Write;

use shopqa_features::FeatureCatalog;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::Classification;

/// The catalog named by `--catalog`, or the built-in one.
pub fn load_catalog(cli: &Cli) -> Result<FeatureCatalog, CliError> {
    match &cli.catalog {
        Some(path) => {
            let catalog = FeatureCatalog::load(path).map_err(|source| CliError::Catalog {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), features = catalog.len(), "loaded catalog");
            Ok(catalog)
        }
        None => Ok(FeatureCatalog::builtin()),
    }
}

/// Execute the parsed command, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    let catalog = load_catalog(cli)?;
    execute(&catalog, cli, out)
}

fn execute<W: Write>(catalog: &FeatureCatalog, cli: &Cli, out: &mut W) -> Result<(), CliError> {
    match &cli.command {
        Command::Classify { paths } => {
            let results: Vec<Classification<'_>> = paths
                .iter()
                .map(|path| Classification {
                    path,
                    feature: &catalog.classify(path).name,
                })
                .collect();
            output::write_classifications(out, cli.format, &results)
        }
        Command::List => {
            let mut features = catalog.features_in_priority_order();
            features.push(catalog.fallback());
            output::write_feature_list(out, cli.format, &features)
        }
        Command::Show { name } => {
            let feature = catalog
                .lookup(name)
                .ok_or_else(|| CliError::UnknownFeature {
                    name: name.clone(),
                    known: known_names(catalog),
                })?;
            output::write_feature(out, cli.format, feature)
        }
        Command::Scan { dir, files } => {
            let report = scan::scan(catalog, dir)?;
            if report.total_files == 0 {
                output::print_warning(format_args!("no files found under {}", dir.display()));
            }
            output::write_scan_report(out, cli.format, &report, *files)
        }
        Command::Export => {
            out.write_all(catalog.to_toml_string()?.as_bytes())?;
            Ok(())
        }
    }
}

fn known_names(catalog: &FeatureCatalog) -> String {
    catalog
        .features_in_priority_order()
        .into_iter()
        .chain(std::iter::once(catalog.fallback()))
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
