// ABOUTME: Session feature flags and validated configuration
// ABOUTME: Mirrors the host site's cooking-mode, scaling, and unit-toggle switches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

//! # Session Configuration
//!
//! The hosting site decides which cooking aids are active; the engine
//! behaves correctly with any subset disabled. Scaling off pins the scale
//! factor to 1, unit toggle off makes the conversion pipeline a
//! pass-through, and keep-awake off skips wake-lock acquisition entirely.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{env_config, servings};
use crate::errors::{AppError, AppResult};
use crate::models::UnitSystem;

/// Feature flags and serving bounds for a cooking session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Serving-count scaling controls
    pub scaling_enabled: bool,
    /// Metric/US unit toggle
    pub unit_toggle_enabled: bool,
    /// Keep-awake acquisition while a session is open
    pub keep_awake_enabled: bool,
    /// Unit system in effect before any persisted preference applies
    pub default_unit_system: UnitSystem,
    /// Serving count the recipe was authored for
    pub base_servings: u32,
    /// Lowest serving count the controls allow
    pub min_servings: u32,
    /// Highest serving count the controls allow
    pub max_servings: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scaling_enabled: true,
            unit_toggle_enabled: true,
            keep_awake_enabled: true,
            default_unit_system: UnitSystem::Metric,
            base_servings: servings::DEFAULT_BASE,
            min_servings: servings::DEFAULT_MIN,
            max_servings: servings::DEFAULT_MAX,
        }
    }
}

impl SessionConfig {
    /// Load defaults with environment overrides applied
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            scaling_enabled: env_flag("COOK_SCALING", true),
            unit_toggle_enabled: env_flag("COOK_UNIT_TOGGLE", true),
            keep_awake_enabled: env_flag("COOK_KEEP_AWAKE", true),
            default_unit_system: env_config::default_unit_system(),
            base_servings: servings::DEFAULT_BASE,
            min_servings: servings::DEFAULT_MIN,
            max_servings: env_config::max_servings(),
        }
    }

    /// Override the base serving count for a specific recipe
    #[must_use]
    pub const fn with_base_servings(mut self, base_servings: u32) -> Self {
        self.base_servings = base_servings;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when `base_servings` or `min_servings` is zero, the
    /// serving bounds are inverted, or the base falls outside
    /// `[min_servings, max_servings]`.
    pub fn validate(&self) -> AppResult<()> {
        if self.base_servings == 0 {
            return Err(AppError::config("base_servings must be at least 1"));
        }
        if self.min_servings == 0 {
            return Err(AppError::config("min_servings must be at least 1"));
        }
        if self.min_servings > self.max_servings {
            return Err(AppError::config(format!(
                "min_servings {} exceeds max_servings {}",
                self.min_servings, self.max_servings
            )));
        }
        if !(self.min_servings..=self.max_servings).contains(&self.base_servings) {
            return Err(AppError::config(format!(
                "base_servings {} outside [{}, {}]",
                self.base_servings, self.min_servings, self.max_servings
            )));
        }
        Ok(())
    }

    /// Log the enabled feature set
    pub fn log_enabled_features(&self) {
        let enabled = collect_enabled(&[
            (self.scaling_enabled, "scaling"),
            (self.unit_toggle_enabled, "unit-toggle"),
            (self.keep_awake_enabled, "keep-awake"),
        ]);
        if enabled.is_empty() {
            info!("cooking session features: none");
        } else {
            info!("cooking session features: {}", enabled.join(", "));
        }
    }
}

/// Collect enabled features from a slice of (enabled, name) pairs
fn collect_enabled(features: &[(bool, &'static str)]) -> Vec<&'static str> {
    features
        .iter()
        .filter_map(|(enabled, name)| enabled.then_some(*name))
        .collect()
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name).map_or(default, |raw| raw != "false" && raw != "0")
}
