// ABOUTME: System-wide constants and configuration defaults for the session engine
// ABOUTME: Storage keys, query parameter names, serving bounds, and env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

//! # Constants Module
//!
//! Application constants and environment-based configuration values.

use std::env;

/// Persisted preference keys
///
/// The step and servings keys are scoped per recipe; the unit-system key is
/// a single shared key across all recipe sessions (last write wins).
pub mod storage_keys {
    /// Per-recipe step key prefix; full key is `cook.step.<slug>`
    pub const STEP_PREFIX: &str = "cook.step.";

    /// Per-recipe servings key prefix; full key is `cook.servings.<slug>`
    pub const SERVINGS_PREFIX: &str = "cook.servings.";

    /// Global unit-system key shared by every recipe session
    pub const UNIT_SYSTEM: &str = "cook.units";

    /// Build the step key for a recipe slug
    #[must_use]
    pub fn step_key(slug: &str) -> String {
        format!("{STEP_PREFIX}{slug}")
    }

    /// Build the servings key for a recipe slug
    #[must_use]
    pub fn servings_key(slug: &str) -> String {
        format!("{SERVINGS_PREFIX}{slug}")
    }
}

/// Query-parameter names accepted as a restoration source
pub mod query_params {
    /// Step index (`step=2`)
    pub const STEP: &str = "step";

    /// Serving count (`servings=6`)
    pub const SERVINGS: &str = "servings";

    /// Unit system (`units=metric`)
    pub const UNITS: &str = "units";
}

/// Serving-count bounds
pub mod servings {
    /// Lowest serving count the controls allow
    pub const DEFAULT_MIN: u32 = 1;

    /// Highest serving count the controls allow
    pub const DEFAULT_MAX: u32 = 16;

    /// Base serving count used when a recipe does not provide one
    pub const DEFAULT_BASE: u32 = 4;
}

/// Environment-based configuration overrides
pub mod env_config {
    use super::env;
    use crate::models::UnitSystem;

    /// Get the default unit system from the environment or fall back to metric
    #[must_use]
    pub fn default_unit_system() -> UnitSystem {
        env::var("COOK_DEFAULT_UNITS")
            .ok()
            .as_deref()
            .and_then(UnitSystem::parse_strict)
            .unwrap_or(UnitSystem::Metric)
    }

    /// Get the maximum serving count from the environment or default
    #[must_use]
    pub fn max_servings() -> u32 {
        env::var("COOK_MAX_SERVINGS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(super::servings::DEFAULT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_keys_embed_slug() {
        assert_eq!(storage_keys::step_key("tinga"), "cook.step.tinga");
        assert_eq!(storage_keys::servings_key("tinga"), "cook.servings.tinga");
    }
}
