// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob-subset to regex translation.
//!
//! Supported wildcards:
//! - `**` matches any run of characters, including `/`
//! - `*` matches any run of characters within one path segment
//!
//! Every other character passes through as regex syntax, so `.` still means
//! "any character". The compiled regex is case-insensitive and unanchored:
//! a pattern matches when it matches any substring of the path. This means
//! `*.ts` also matches `src/main.tsx`; callers relying on whole-segment
//! semantics should write the pattern accordingly.

use regex::{Regex, RegexBuilder};

/// Stand-in for `**` while single `*` wildcards are rewritten.
const GLOBSTAR: &str = "\u{0}";

const ANY_RUN: &str = ".*";
const SEGMENT_RUN: &str = "[^/]*";

/// Translate a glob-like pattern into regex source.
///
/// Non-wildcard characters are not escaped.
pub fn glob_to_regex(pattern: &str) -> String {
    pattern
        .replace("**", GLOBSTAR)
        .replace('*', SEGMENT_RUN)
        .replace(GLOBSTAR, ANY_RUN)
}

/// Translation used when [`glob_to_regex`] yields an invalid regex:
/// wildcards keep their meaning, everything else matches literally.
fn escaped_glob_to_regex(pattern: &str) -> String {
    pattern
        .split("**")
        .map(|part| {
            part.split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(SEGMENT_RUN)
        })
        .collect::<Vec<_>>()
        .join(ANY_RUN)
}

fn compile(source: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(source).case_insensitive(true).build()
}

/// A compiled glob-like path pattern.
#[derive(Clone, Debug)]
pub struct GlobPattern {
    source: String,
    matcher: Option<Regex>,
    literal_fallback: bool,
}

impl GlobPattern {
    /// Compile a pattern. Never fails: a pattern whose translation is not a
    /// valid regex is retried with its non-wildcard characters escaped.
    pub fn new(pattern: &str) -> Self {
        match compile(&glob_to_regex(pattern)) {
            Ok(regex) => Self {
                source: pattern.to_string(),
                matcher: Some(regex),
                literal_fallback: false,
            },
            Err(err) => {
                tracing::debug!(pattern, error = %err, "glob pattern is not valid regex, matching literally");
                Self {
                    source: pattern.to_string(),
                    matcher: compile(&escaped_glob_to_regex(pattern)).ok(),
                    literal_fallback: true,
                }
            }
        }
    }

    /// The original glob text
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern had to be compiled with literal escaping.
    pub fn is_literal_fallback(&self) -> bool {
        self.literal_fallback
    }

    /// Test the pattern against a path (substring match, case-insensitive).
    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.as_ref().is_some_and(|re| re.is_match(path))
    }
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
