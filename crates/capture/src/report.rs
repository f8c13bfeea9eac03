// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Categorized error views and assertion failures.

use std::fmt;

/// Captured errors split by category, each in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorizedErrors {
    /// Errors indicating a defect in the code under test
    pub application_errors: Vec<String>,
    /// Errors indicating incomplete test wiring
    pub setup_errors: Vec<String>,
}

impl CategorizedErrors {
    /// Total number of errors in both categories
    pub fn total(&self) -> usize {
        self.application_errors.len() + self.setup_errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Assertion failure: the console received errors the test did not allow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnexpectedConsoleOutput {
    pub errors: CategorizedErrors,
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, messages: &[String]) -> fmt::Result {
    if messages.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "{} ({}):", title, messages.len())?;
    for (i, message) in messages.iter().enumerate() {
        writeln!(f, "  {}. {}", i + 1, message)?;
    }
    Ok(())
}

impl fmt::Display for UnexpectedConsoleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expected no console errors but found {}",
            self.errors.total()
        )?;
        write_section(f, "Application errors", &self.errors.application_errors)?;
        write_section(
            f,
            "Setup errors (missing providers or test wiring)",
            &self.errors.setup_errors,
        )
    }
}

impl std::error::Error for UnexpectedConsoleOutput {}

/// Multi-line count report used by `ConsoleTracker::summary`.
pub(crate) fn summary(errors: &CategorizedErrors, warnings: usize) -> String {
    format!(
        "Console summary:\n  Total errors: {}\n  Application errors: {}\n  Setup errors: {}\n  Warnings: {}",
        errors.total(),
        errors.application_errors.len(),
        errors.setup_errors.len(),
        warnings
    )
}
