// ABOUTME: Preference persistence with tri-source restoration
// ABOUTME: KeyValueStore abstraction, validation rules, and best-effort writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

//! # Preference Store
//!
//! Three independently scoped preferences survive across sessions: the
//! per-recipe step, the per-recipe serving count, and the global unit
//! system. Restoration resolves deterministically across three sources
//! (persisted store, then caller-parsed query parameters, then the
//! caller-supplied default), and every candidate is validated before use;
//! a validation miss is treated as absent. Persistence failures are logged
//! at debug level and never propagate past this boundary.

use std::collections::HashMap;

use tracing::debug;

use crate::constants::{query_params, storage_keys};
use crate::errors::AppResult;
use crate::models::UnitSystem;

/// Pluggable key→string persistence backend
///
/// Implementations may fail loudly (`Err`) or silently drop writes; the
/// preference layer tolerates both modes.
pub trait KeyValueStore {
    /// Read a value, `Ok(None)` when the key is absent
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or read-only.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// In-memory store for tests and storage-less hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Tri-source preference resolution over a pluggable store
#[derive(Debug)]
pub struct PreferenceStore<S: KeyValueStore> {
    store: S,
    query: HashMap<String, String>,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Wrap a persistence backend with no query-parameter source
    pub fn new(store: S) -> Self {
        Self {
            store,
            query: HashMap::new(),
        }
    }

    /// Attach caller-parsed query parameters as the second restoration source
    #[must_use]
    pub fn with_query(mut self, query: HashMap<String, String>) -> Self {
        self.query = query;
        self
    }

    /// Restore the per-recipe step, valid only within `[0, step_count)`
    #[must_use]
    pub fn load_step(&self, slug: &str, step_count: usize) -> Option<usize> {
        self.resolve(&storage_keys::step_key(slug), query_params::STEP, |raw| {
            raw.parse::<usize>().ok().filter(|step| *step < step_count)
        })
    }

    /// Restore the per-recipe serving count within `[min, max]`
    #[must_use]
    pub fn load_servings(&self, slug: &str, min: u32, max: u32) -> Option<u32> {
        self.resolve(
            &storage_keys::servings_key(slug),
            query_params::SERVINGS,
            |raw| {
                raw.parse::<u32>()
                    .ok()
                    .filter(|value| (min..=max).contains(value))
            },
        )
    }

    /// Restore the global unit system; only the literal tokens `metric`/`us` count
    #[must_use]
    pub fn load_unit_system(&self) -> Option<UnitSystem> {
        self.resolve(
            storage_keys::UNIT_SYSTEM,
            query_params::UNITS,
            UnitSystem::parse_strict,
        )
    }

    /// Persist the per-recipe step (best effort)
    pub fn save_step(&mut self, slug: &str, step: usize) {
        self.write(&storage_keys::step_key(slug), &step.to_string());
    }

    /// Persist the per-recipe serving count (best effort)
    pub fn save_servings(&mut self, slug: &str, servings: u32) {
        self.write(&storage_keys::servings_key(slug), &servings.to_string());
    }

    /// Persist the global unit system (best effort, last write wins)
    pub fn save_unit_system(&mut self, system: UnitSystem) {
        self.write(storage_keys::UNIT_SYSTEM, system.as_str());
    }

    /// Resolve a preference: store first, then query parameters
    ///
    /// The first candidate that passes validation wins; an invalid candidate
    /// counts as absent, so a corrupted store entry still lets a query
    /// parameter through.
    fn resolve<T>(
        &self,
        key: &str,
        query_key: &str,
        validate: impl Fn(&str) -> Option<T>,
    ) -> Option<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => {
                if let Some(value) = validate(&raw) {
                    return Some(value);
                }
                debug!("discarding invalid stored preference for {key}: {raw:?}");
            }
            Ok(None) => {}
            Err(err) => debug!("preference read failed for {key}: {err}"),
        }
        self.query.get(query_key).and_then(|raw| validate(raw))
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            debug!("preference write skipped for {key}: {err}");
        }
    }
}
