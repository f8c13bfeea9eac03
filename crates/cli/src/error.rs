// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use shopqa_features::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to load catalog {}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },

    #[error("unknown feature '{name}' (known: {known})")]
    UnknownFeature { name: String, known: String },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid scan root {}: {source}", path.display())]
    ScanPattern {
        path: PathBuf,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to serialize catalog: {0}")]
    Export(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
