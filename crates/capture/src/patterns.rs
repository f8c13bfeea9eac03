// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Baseline setup-error patterns.
//!
//! These match diagnostics caused by incomplete test wiring (missing
//! providers, undeclared elements or bindings) rather than defects in the
//! code under test.

use regex::Regex;
use std::sync::LazyLock;

const SETUP_PATTERN_SOURCES: &[&str] = &[
    r"NullInjectorError",
    r"R3InjectorError",
    r"No provider for",
    r"NG0201\b",
    r"inject\(\) must be called from an injection context",
    r"Can't bind to '[^']+' since it isn't a known property",
    r"'[^']+' is not a known element",
];

static SETUP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SETUP_PATTERN_SOURCES
        .iter()
        .filter_map(|source| match Regex::new(source) {
            Ok(re) => Some(re),
            Err(err) => {
                tracing::error!(pattern = *source, error = %err, "invalid setup pattern");
                None
            }
        })
        .collect()
});

/// The fixed setup patterns every tracker starts with.
pub fn default_setup_patterns() -> Vec<Regex> {
    SETUP_PATTERNS.clone()
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
