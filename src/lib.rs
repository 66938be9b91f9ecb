// ABOUTME: Main library entry point for the sous-chef cooking session engine
// ABOUTME: Exposes unit conversion, serving scaling, preferences, and the session state machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

#![deny(unsafe_code)]

//! # Sous Chef
//!
//! A cooking session engine for recipe readers. Given a recipe's ingredient
//! list and step list, it rescales ingredient quantities to a different
//! serving count, converts quantities between metric and US customary units,
//! and drives a persisted, distraction-free step-by-step cooking session.
//!
//! ## Features
//!
//! - **Unit conversion**: metric ↔ US customary weight and volume with
//!   natural destination-unit selection (no "0.2 kg" or "1500 g" displays)
//! - **Serving scaling**: linear ingredient scaling from a recipe's base
//!   serving count, clamped to configurable bounds
//! - **Note rewriting**: embedded quantities in free-text ingredient notes
//!   ("softened, about 250g") are converted in place
//! - **Persisted sessions**: current step, servings, and unit system are
//!   restored from a pluggable key-value store and written through on change
//! - **Wake-lock lifecycle**: best-effort keep-awake capability scoped to an
//!   open session
//!
//! ## Architecture
//!
//! The engine is a pipeline of pure leaves composed by one stateful
//! orchestrator:
//! - **Units**: conversion tables, the conversion engine, amount formatting,
//!   and note rewriting
//! - **Scaling**: serving-ratio arithmetic applied before conversion
//! - **Preferences**: tri-source restoration (store → query parameters →
//!   defaults) over a pluggable `KeyValueStore`
//! - **Session**: the `Closed ⇄ Open` state machine owning all mutable state
//!
//! ## Example
//!
//! ```rust
//! use sous_chef::config::SessionConfig;
//! use sous_chef::models::{Ingredient, RecipeContent};
//! use sous_chef::preferences::{MemoryStore, PreferenceStore};
//! use sous_chef::session::{NoopWakeLock, SessionController, SessionEvent};
//!
//! # fn main() -> sous_chef::errors::AppResult<()> {
//! let recipe = RecipeContent {
//!     slug: "miso-butter-salmon".into(),
//!     title: "Miso Butter Salmon".into(),
//!     ingredients: vec![Ingredient::new("salmon fillet", 500.0, Some("g"))],
//!     steps: vec!["Preheat the oven.".into(), "Roast the salmon.".into()],
//! };
//! let prefs = PreferenceStore::new(MemoryStore::new());
//! let mut session =
//!     SessionController::new(SessionConfig::default(), recipe, prefs, NoopWakeLock)?;
//! session.handle_event(SessionEvent::Open);
//! session.handle_event(SessionEvent::Next);
//! assert_eq!(session.view().step_index, 1);
//! # Ok(())
//! # }
//! ```

/// Session configuration and feature flags
pub mod config;

/// Application constants: storage keys, query parameters, serving bounds
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Logging configuration built on `tracing`
pub mod logging;

/// Core data models: ingredients, recipes, unit systems, view models
pub mod models;

/// Preference persistence with tri-source restoration
pub mod preferences;

/// Serving-count scaling arithmetic
pub mod scaling;

/// The cooking session state machine and wake-lock lifecycle
pub mod session;

/// Unit conversion engine, tables, formatting, and note rewriting
pub mod units;
