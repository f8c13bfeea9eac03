// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory scan: walk a source tree and bucket its files by feature.

use std::path::{Component, Path};

use glob::{glob_with, MatchOptions, Pattern};
use serde::Serialize;
use shopqa_features::FeatureCatalog;

use crate::error::CliError;

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "dist", "coverage"];

/// Files found under one feature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureCount {
    pub feature: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_files: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl FeatureCount {
    /// Signed difference between found and estimated file counts.
    pub fn drift(&self) -> Option<i64> {
        self.estimated_files
            .map(|estimate| self.count as i64 - i64::from(estimate))
    }
}

/// Result of scanning one directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub root: String,
    pub total_files: usize,
    pub features: Vec<FeatureCount>,
}

/// Relative paths (forward slashes) of every regular file under `dir`,
/// sorted. Hidden entries and [`SKIPPED_DIRS`] are left out.
pub fn collect_files(dir: &Path) -> Result<Vec<String>, CliError> {
    if !dir.is_dir() {
        return Err(CliError::NotADirectory(dir.to_path_buf()));
    }

    let pattern = format!(
        "{}/**/*",
        Pattern::escape(&dir.to_string_lossy()).trim_end_matches('/')
    );
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let entries = glob_with(&pattern, options).map_err(|source| CliError::ScanPattern {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        let Ok(relative) = path.strip_prefix(dir) else {
            continue;
        };
        if is_skipped(relative) {
            continue;
        }
        files.push(to_slash(relative));
    }
    files.sort();
    tracing::debug!(dir = %dir.display(), count = files.len(), "collected files");
    Ok(files)
}

/// Walk `dir` and group its files with `catalog`.
pub fn scan(catalog: &FeatureCatalog, dir: &Path) -> Result<ScanReport, CliError> {
    let files = collect_files(dir)?;
    let total_files = files.len();
    let features = catalog
        .group(files)
        .into_iter()
        .map(|(feature, files)| FeatureCount {
            feature: feature.name.clone(),
            count: files.len(),
            estimated_files: feature.estimated_files,
            files,
        })
        .collect();

    Ok(ScanReport {
        root: dir.display().to_string(),
        total_files,
        features,
    })
}

fn is_skipped(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name)),
        _ => false,
    })
}

fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
