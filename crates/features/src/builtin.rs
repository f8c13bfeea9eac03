// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in catalog for the consignment-shop front-end.

use crate::catalog::FeatureCatalog;
use crate::feature::{FeatureConfig, FALLBACK_FEATURE};

/// Priority given to the fallback; every other feature must sort before it.
const FALLBACK_PRIORITY: i32 = 99;

fn builtin_features() -> Vec<FeatureConfig> {
    vec![
        FeatureConfig::new("auth", 1, ["**/auth/**", "**/login/**", "**/register/**", "**/guards/**"])
            .with_description("Login, registration, password reset and route guards")
            .with_estimated_files(18),
        FeatureConfig::new("admin", 2, ["**/admin/**", "**/approvals/**"])
            .with_description("Platform admin: shop-owner approval and oversight")
            .with_estimated_files(14),
        FeatureConfig::new("checkout", 3, ["**/checkout/**", "**/cart/**"])
            .with_description("Shopper cart and checkout flow")
            .with_estimated_files(12),
        FeatureConfig::new("storefront", 4, ["**/storefront/**", "**/shop/**", "**/public/**"])
            .with_description("Per-store public storefront browsing")
            .with_estimated_files(20),
        FeatureConfig::new("inventory", 5, ["**/inventory/**", "**/items/**"])
            .with_description("Item intake, pricing and stock management")
            .with_estimated_files(26),
        FeatureConfig::new("consignors", 5, ["**/consignors/**", "**/providers/**"])
            .with_description("Consignor (provider) accounts and agreements")
            .with_estimated_files(16),
        FeatureConfig::new("sales", 6, ["**/sales/**", "**/pos/**", "**/transactions/**"])
            .with_description("Point of sale and sales history")
            .with_estimated_files(15),
        FeatureConfig::new("payouts", 7, ["**/payouts/**", "**/statements/**"])
            .with_description("Consignor payout runs and statements")
            .with_estimated_files(10),
        FeatureConfig::new("settings", 8, ["**/settings/**", "**/preferences/**"])
            .with_description("Shop configuration and preferences")
            .with_estimated_files(11),
        FeatureConfig::new("dashboard", 9, ["**/dashboard/**", "**/reports/**"])
            .with_description("Owner dashboard and reporting")
            .with_estimated_files(9),
        FeatureConfig::new("shared", 10, ["**/shared/**", "**/core/**", "**/testing/**"])
            .with_description("Shared components, services and test utilities")
            .with_estimated_files(30),
        FeatureConfig::new(FALLBACK_FEATURE, FALLBACK_PRIORITY, ["**/*"])
            .with_description("Anything not claimed by another feature"),
    ]
}

impl FeatureCatalog {
    /// The catalog used when no catalog file is supplied.
    pub fn builtin() -> Self {
        match Self::new(builtin_features()) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::error!(error = %err, "built-in feature catalog is invalid");
                Self::fallback_only(FeatureConfig::new(
                    FALLBACK_FEATURE,
                    FALLBACK_PRIORITY,
                    ["**/*"],
                ))
            }
        }
    }
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
