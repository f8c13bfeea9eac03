// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Feature bucket definitions.

use serde::{Deserialize, Serialize};

/// Name of the catch-all feature every catalog must contain.
pub const FALLBACK_FEATURE: &str = "other";

/// A named feature bucket and the path patterns that select it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureConfig {
    /// Unique identifier (e.g. "inventory", "auth")
    pub name: String,

    /// Human-readable summary
    #[serde(default)]
    pub description: String,

    /// Glob-like patterns; a path belongs to the feature if any pattern matches
    #[serde(alias = "pathPatterns")]
    pub path_patterns: Vec<String>,

    /// Evaluation order, lower first
    pub priority: i32,

    /// Informational file count, no effect on matching
    #[serde(default, alias = "estimatedFiles", skip_serializing_if = "Option::is_none")]
    pub estimated_files: Option<u32>,
}

impl FeatureConfig {
    /// Create a feature with the given name, priority and patterns.
    pub fn new<I, S>(name: impl Into<String>, priority: i32, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: String::new(),
            path_patterns: patterns.into_iter().map(Into::into).collect(),
            priority,
            estimated_files: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the estimated file count
    pub fn with_estimated_files(mut self, count: u32) -> Self {
        self.estimated_files = Some(count);
        self
    }

    /// Whether this is the catch-all fallback feature.
    pub fn is_fallback(&self) -> bool {
        self.name.eq_ignore_ascii_case(FALLBACK_FEATURE)
    }
}
