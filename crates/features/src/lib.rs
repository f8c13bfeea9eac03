// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Feature-bucket classification for source paths.
//!
//! A [`FeatureCatalog`] holds an ordered set of [`FeatureConfig`] entries,
//! each with glob-like path patterns. [`FeatureCatalog::classify`] assigns
//! any path to exactly one feature, falling back to the `other` bucket when
//! nothing else matches.
//!
//! ```
//! use shopqa_features::FeatureCatalog;
//!
//! let catalog = FeatureCatalog::builtin();
//! assert_eq!(catalog.classify("src/app/admin/approvals.ts").name, "admin");
//! assert_eq!(catalog.classify("README.md").name, "other");
//! ```

mod builtin;
mod catalog;
mod feature;
mod glob;

pub use catalog::{CatalogError, FeatureCatalog};
pub use feature::{FeatureConfig, FALLBACK_FEATURE};
pub use glob::{glob_to_regex, GlobPattern};
