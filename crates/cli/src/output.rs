// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of command results.

use std::io::{self, IsTerminal, Write};

use serde::Serialize;
use shopqa_features::FeatureConfig;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::scan::ScanReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }

    /// ANSI color code: red for errors, yellow for warnings
    fn color(self) -> u8 {
        match self {
            Self::Error => 31,
            Self::Warning => 33,
        }
    }
}

/// Print an error to stderr, in red when stderr is a terminal.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), Severity::Error, msg, is_tty);
}

/// Print a warning to stderr, in yellow when stderr is a terminal.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), Severity::Warning, msg, is_tty);
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    severity: Severity,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    let _ = if is_terminal {
        writeln!(
            writer,
            "\x1b[{}m{}: {}\x1b[0m",
            severity.color(),
            severity.label(),
            msg
        )
    } else {
        writeln!(writer, "{}: {}", severity.label(), msg)
    };
}

/// One classified path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Classification<'a> {
    pub path: &'a str,
    pub feature: &'a str,
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_classifications<W: Write>(
    out: &mut W,
    format: OutputFormat,
    results: &[Classification<'_>],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(out, results),
        OutputFormat::Text => {
            for result in results {
                writeln!(out, "{}\t{}", result.feature, result.path)?;
            }
            Ok(())
        }
    }
}

pub fn write_feature_list<W: Write>(
    out: &mut W,
    format: OutputFormat,
    features: &[&FeatureConfig],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(out, features),
        OutputFormat::Text => {
            let width = features.iter().map(|f| f.name.len()).max().unwrap_or(0);
            for feature in features {
                writeln!(
                    out,
                    "{:>3}  {:<width$}  {}",
                    feature.priority, feature.name, feature.description
                )?;
            }
            Ok(())
        }
    }
}

pub fn write_feature<W: Write>(
    out: &mut W,
    format: OutputFormat,
    feature: &FeatureConfig,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(out, feature),
        OutputFormat::Text => {
            writeln!(out, "{}", feature.name)?;
            if !feature.description.is_empty() {
                writeln!(out, "  {}", feature.description)?;
            }
            writeln!(out, "  priority: {}", feature.priority)?;
            if let Some(estimate) = feature.estimated_files {
                writeln!(out, "  estimated files: {}", estimate)?;
            }
            writeln!(out, "  patterns:")?;
            for pattern in &feature.path_patterns {
                writeln!(out, "    {}", pattern)?;
            }
            Ok(())
        }
    }
}

pub fn write_scan_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    report: &ScanReport,
    list_files: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json if list_files => write_json(out, report),
        OutputFormat::Json => {
            let mut report = report.clone();
            for feature in &mut report.features {
                feature.files.clear();
            }
            write_json(out, &report)
        }
        OutputFormat::Text => {
            writeln!(out, "{} files under {}", report.total_files, report.root)?;
            let width = report
                .features
                .iter()
                .map(|f| f.feature.len())
                .max()
                .unwrap_or(0);
            for feature in &report.features {
                write!(out, "  {:<width$}  {:>5}", feature.feature, feature.count)?;
                match (feature.estimated_files, feature.drift()) {
                    (Some(estimate), Some(drift)) => {
                        writeln!(out, "  (estimated {}, {:+})", estimate, drift)?
                    }
                    _ => writeln!(out)?,
                }
                if list_files {
                    for file in &feature.files {
                        writeln!(out, "      {}", file)?;
                    }
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
