// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validated feature catalogs and path classification.

use crate::feature::FeatureConfig;
use crate::glob::GlobPattern;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("feature at index {0} has an empty name")]
    EmptyName(usize),

    #[error("duplicate feature name '{0}'")]
    DuplicateName(String),

    #[error("feature '{0}' has no path patterns")]
    NoPatterns(String),

    #[error("catalog has no 'other' fallback feature")]
    MissingFallback,

    #[error("fallback priority {fallback} must be greater than '{name}' priority {priority}")]
    FallbackNotLast {
        name: String,
        priority: i32,
        fallback: i32,
    },
}

/// On-disk catalog layout: a list of `[[feature]]` tables.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(rename = "feature", default)]
    features: Vec<FeatureConfig>,
}

#[derive(Clone, Debug)]
struct CompiledFeature {
    config: FeatureConfig,
    patterns: Vec<GlobPattern>,
}

impl CompiledFeature {
    fn matches(&self, normalized: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(normalized))
    }
}

/// An immutable, validated set of features with a fallback bucket.
///
/// Classification is read-only, so a catalog can be shared freely across
/// threads.
#[derive(Clone, Debug)]
pub struct FeatureCatalog {
    /// Non-fallback features in declaration order
    features: Vec<CompiledFeature>,
    /// Indices into `features`, stable-sorted by priority
    order: Vec<usize>,
    fallback: FeatureConfig,
}

impl FeatureCatalog {
    /// Build a catalog, validating names, patterns and the fallback.
    pub fn new(features: Vec<FeatureConfig>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut fallback = None;
        let mut compiled = Vec::with_capacity(features.len());

        for (index, config) in features.into_iter().enumerate() {
            if config.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(index));
            }
            if !seen.insert(config.name.to_lowercase()) {
                return Err(CatalogError::DuplicateName(config.name));
            }
            if config.path_patterns.is_empty() {
                return Err(CatalogError::NoPatterns(config.name));
            }
            if config.is_fallback() {
                fallback = Some(config);
                continue;
            }
            let patterns = config
                .path_patterns
                .iter()
                .map(|p| GlobPattern::new(p))
                .collect();
            compiled.push(CompiledFeature { config, patterns });
        }

        let fallback = fallback.ok_or(CatalogError::MissingFallback)?;
        if let Some(offender) = compiled
            .iter()
            .map(|f| &f.config)
            .find(|c| c.priority >= fallback.priority)
        {
            return Err(CatalogError::FallbackNotLast {
                name: offender.name.clone(),
                priority: offender.priority,
                fallback: fallback.priority,
            });
        }

        // `sort_by_key` is stable, so equal priorities keep declaration order.
        let mut order: Vec<usize> = (0..compiled.len()).collect();
        order.sort_by_key(|&i| compiled[i].config.priority);

        tracing::debug!(features = compiled.len() + 1, "feature catalog built");

        Ok(Self {
            features: compiled,
            order,
            fallback,
        })
    }

    /// A catalog where every path lands in `fallback`.
    pub(crate) fn fallback_only(fallback: FeatureConfig) -> Self {
        Self {
            features: Vec::new(),
            order: Vec::new(),
            fallback,
        }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.features)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize the catalog (fallback last) back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let mut features: Vec<FeatureConfig> =
            self.features.iter().map(|f| f.config.clone()).collect();
        features.push(self.fallback.clone());
        toml::to_string(&CatalogFile { features })
    }

    /// Assign a path to exactly one feature.
    ///
    /// Separators are normalized to `/` and the path is lowercased before
    /// matching. Features are tried in priority order and the first one with
    /// a matching pattern wins; otherwise the fallback is returned.
    pub fn classify(&self, path: &str) -> &FeatureConfig {
        let normalized = normalize_path(path);
        self.order
            .iter()
            .map(|&i| &self.features[i])
            .find(|f| f.matches(&normalized))
            .map_or(&self.fallback, |f| &f.config)
    }

    /// All non-fallback features, ascending priority, ties in declaration order.
    pub fn features_in_priority_order(&self) -> Vec<&FeatureConfig> {
        self.order.iter().map(|&i| &self.features[i].config).collect()
    }

    /// All non-fallback features in declaration order.
    pub fn list(&self) -> Vec<&FeatureConfig> {
        self.features.iter().map(|f| &f.config).collect()
    }

    /// Case-insensitive lookup by name, including the fallback.
    pub fn lookup(&self, name: &str) -> Option<&FeatureConfig> {
        if self.fallback.name.eq_ignore_ascii_case(name) {
            return Some(&self.fallback);
        }
        self.features
            .iter()
            .map(|f| &f.config)
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// The catch-all feature
    pub fn fallback(&self) -> &FeatureConfig {
        &self.fallback
    }

    /// Number of features including the fallback
    pub fn len(&self) -> usize {
        self.features.len() + 1
    }

    /// Always false: a valid catalog contains at least the fallback.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Classify many paths into buckets.
    ///
    /// Buckets follow priority order with the fallback last; features with
    /// no matching paths are omitted. Paths keep their input order.
    pub fn group<I, S>(&self, paths: I) -> Vec<(&FeatureConfig, Vec<String>)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buckets: Vec<(&FeatureConfig, Vec<String>)> = self
            .features_in_priority_order()
            .into_iter()
            .chain(std::iter::once(&self.fallback))
            .map(|f| (f, Vec::new()))
            .collect();

        for path in paths {
            let path = path.into();
            let name = &self.classify(&path).name;
            if let Some((_, bucket)) = buckets.iter_mut().find(|(f, _)| &f.name == name) {
                bucket.push(path);
            }
        }

        buckets.retain(|(_, paths)| !paths.is_empty());
        buckets
    }
}

/// Canonical form used for matching: forward slashes, lowercase.
pub(crate) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/").to_lowercase()
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
