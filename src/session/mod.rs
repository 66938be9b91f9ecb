// ABOUTME: Cooking session state machine: step navigation, servings, units, wake lock
// ABOUTME: Owns the mutable session state and writes preferences through on change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

//! # Cooking Session
//!
//! A session moves between `Closed` and `Open`. Opening restores the three
//! persisted preferences (falling back to caller defaults), resets
//! transient state, and attempts best-effort wake-lock acquisition. Every
//! transition while open writes through to the preference store, and the
//! view model is recomputed on demand from the scaling → conversion →
//! note-rewrite → formatting pipeline.
//!
//! All transitions are synchronous; nothing here blocks on the wake-lock
//! outcome, so navigation stays responsive regardless of platform support.
//! Keyboard bindings are scoped to the open state: key presses received
//! while closed produce no transition.

/// Keyboard mapping scoped to open sessions
pub mod keyboard;
/// Wake-lock capability
pub mod wake;

mod view;

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::errors::AppResult;
use crate::models::{RecipeContent, SessionView, UnitSystem};
use crate::preferences::{KeyValueStore, PreferenceStore};

pub use keyboard::{event_for_key, Key};
pub use wake::{AcquireOutcome, NoopWakeLock, WakeLock};

/// Discrete inputs driving the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Open the session, restoring persisted preferences
    Open,
    /// Close the session; preferences stay persisted for the next open
    Close,
    /// Advance one step (clamped at the last step)
    Next,
    /// Go back one step (clamped at the first step)
    Previous,
    /// Jump to a step (clamped into bounds)
    GoTo(usize),
    /// Add one serving (clamped; inert when scaling is disabled)
    IncrementServings,
    /// Remove one serving (clamped; inert when scaling is disabled)
    DecrementServings,
    /// Set the serving count directly (clamped; inert when scaling is disabled)
    SetServings(u32),
    /// Switch unit systems (inert when the unit toggle is disabled)
    SetUnitSystem(UnitSystem),
    /// A key press; mapped only while the session is open
    Key(Key),
    /// The host became foreground or background
    VisibilityChanged(Visibility),
    /// The platform released the wake lock involuntarily
    WakeLockReleased,
}

/// Host visibility signal used for wake-lock re-acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The session's host is foreground again
    Visible,
    /// The session's host moved to the background
    Hidden,
}

/// Mutable state owned exclusively by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SessionState {
    open: bool,
    current_step: usize,
    servings: u32,
    unit_system: UnitSystem,
    wake_lock_held: bool,
}

/// The stateful session orchestrator
///
/// Composes the preference store, scaling calculator, conversion engine,
/// and note converter to produce the rendered view model for each step.
pub struct SessionController<S: KeyValueStore, W: WakeLock> {
    config: SessionConfig,
    recipe: RecipeContent,
    prefs: PreferenceStore<S>,
    wake: W,
    state: SessionState,
}

impl<S: KeyValueStore, W: WakeLock> SessionController<S, W> {
    /// Create a controller over a recipe
    ///
    /// Validates the configuration and logs the enabled feature set.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid (see
    /// [`SessionConfig::validate`]).
    pub fn new(
        config: SessionConfig,
        recipe: RecipeContent,
        prefs: PreferenceStore<S>,
        wake: W,
    ) -> AppResult<Self> {
        config.validate()?;
        config.log_enabled_features();
        let state = SessionState {
            open: false,
            current_step: 0,
            servings: config.base_servings,
            unit_system: config.default_unit_system,
            wake_lock_held: false,
        };
        Ok(Self {
            config,
            recipe,
            prefs,
            wake,
            state,
        })
    }

    /// Whether the session is open
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.open
    }

    /// Zero-based current step
    #[must_use]
    pub const fn current_step(&self) -> usize {
        self.state.current_step
    }

    /// Current serving count
    #[must_use]
    pub const fn servings(&self) -> u32 {
        self.state.servings
    }

    /// Active unit system
    #[must_use]
    pub const fn unit_system(&self) -> UnitSystem {
        self.state.unit_system
    }

    /// Whether the keep-awake lock is currently held
    #[must_use]
    pub const fn wake_lock_held(&self) -> bool {
        self.state.wake_lock_held
    }

    /// Apply an event; returns whether observable state changed
    pub fn handle_event(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::Open => self.open(),
            SessionEvent::Close => self.close(),
            SessionEvent::Next => self.go_to(self.state.current_step.saturating_add(1)),
            SessionEvent::Previous => self.go_to(self.state.current_step.saturating_sub(1)),
            SessionEvent::GoTo(step) => self.go_to(step),
            SessionEvent::IncrementServings => {
                self.set_servings(self.state.servings.saturating_add(1))
            }
            SessionEvent::DecrementServings => {
                self.set_servings(self.state.servings.saturating_sub(1))
            }
            SessionEvent::SetServings(servings) => self.set_servings(servings),
            SessionEvent::SetUnitSystem(system) => self.set_unit_system(system),
            SessionEvent::Key(key) => self.handle_key(key),
            SessionEvent::VisibilityChanged(visibility) => self.handle_visibility(visibility),
            SessionEvent::WakeLockReleased => self.handle_wake_lock_released(),
        }
    }

    /// Map a key press; inert while the session is closed
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.state.open {
            return false;
        }
        keyboard::event_for_key(key).map_or(false, |event| self.handle_event(event))
    }

    /// Apply a raw serving-count entry from a text input
    ///
    /// An unparseable entry resets to the recipe's base serving count, the
    /// same way the input's blur handler behaves in the reference UI.
    pub fn handle_servings_input(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<u32>() {
            Ok(servings) => self.set_servings(servings),
            Err(_) => self.set_servings(self.config.base_servings),
        }
    }

    /// Build the display snapshot for the current state
    #[must_use]
    pub fn view(&self) -> SessionView {
        view::build_view(
            &self.config,
            &self.recipe,
            self.state.current_step,
            self.state.servings,
            self.state.unit_system,
        )
    }

    fn open(&mut self) -> bool {
        if self.state.open {
            return false;
        }

        let step_count = self.recipe.step_count();
        self.state.current_step = self
            .prefs
            .load_step(&self.recipe.slug, step_count)
            .unwrap_or(0);
        self.state.servings = if self.config.scaling_enabled {
            self.prefs
                .load_servings(
                    &self.recipe.slug,
                    self.config.min_servings,
                    self.config.max_servings,
                )
                .unwrap_or(self.config.base_servings)
        } else {
            self.config.base_servings
        };
        self.state.unit_system = if self.config.unit_toggle_enabled {
            self.prefs
                .load_unit_system()
                .unwrap_or(self.config.default_unit_system)
        } else {
            self.config.default_unit_system
        };
        self.state.open = true;
        self.prefs.save_step(&self.recipe.slug, self.state.current_step);

        if self.config.keep_awake_enabled {
            self.acquire_wake_lock();
        }
        info!(
            recipe = %self.recipe.slug,
            step = self.state.current_step,
            servings = self.state.servings,
            "cooking session opened"
        );
        true
    }

    fn close(&mut self) -> bool {
        if !self.state.open {
            return false;
        }
        if self.state.wake_lock_held {
            self.wake.release();
            self.state.wake_lock_held = false;
        }
        self.state.open = false;
        info!(recipe = %self.recipe.slug, "cooking session closed");
        true
    }

    fn go_to(&mut self, step: usize) -> bool {
        if !self.state.open {
            return false;
        }
        let last = self.recipe.step_count().saturating_sub(1);
        let clamped = step.min(last);
        if clamped == self.state.current_step {
            return false;
        }
        self.state.current_step = clamped;
        self.prefs.save_step(&self.recipe.slug, clamped);
        true
    }

    fn set_servings(&mut self, servings: u32) -> bool {
        if !self.state.open || !self.config.scaling_enabled {
            return false;
        }
        let clamped = servings.clamp(self.config.min_servings, self.config.max_servings);
        if clamped == self.state.servings {
            return false;
        }
        self.state.servings = clamped;
        self.prefs.save_servings(&self.recipe.slug, clamped);
        true
    }

    fn set_unit_system(&mut self, system: UnitSystem) -> bool {
        if !self.state.open || !self.config.unit_toggle_enabled {
            return false;
        }
        if system == self.state.unit_system {
            return false;
        }
        self.state.unit_system = system;
        self.prefs.save_unit_system(system);
        true
    }

    fn handle_visibility(&mut self, visibility: Visibility) -> bool {
        if visibility != Visibility::Visible {
            return false;
        }
        if !self.state.open || !self.config.keep_awake_enabled || self.state.wake_lock_held {
            return false;
        }
        self.acquire_wake_lock();
        self.state.wake_lock_held
    }

    fn handle_wake_lock_released(&mut self) -> bool {
        if !self.state.wake_lock_held {
            return false;
        }
        self.state.wake_lock_held = false;
        true
    }

    /// Acquisition is idempotent: a held lock is left alone
    fn acquire_wake_lock(&mut self) {
        if self.state.wake_lock_held {
            return;
        }
        match self.wake.acquire() {
            AcquireOutcome::Acquired => self.state.wake_lock_held = true,
            AcquireOutcome::Unsupported => debug!("wake lock unsupported on this platform"),
            AcquireOutcome::Denied => debug!("wake lock request denied"),
        }
    }
}
