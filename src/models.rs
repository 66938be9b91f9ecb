// ABOUTME: Core data models for recipes and cooking sessions
// ABOUTME: Ingredient, RecipeContent, UnitSystem, and display view models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

use serde::{Deserialize, Serialize};

/// Measurement system for recipe quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Grams, kilograms, milliliters, liters
    #[default]
    Metric,
    /// Ounces, pounds, fluid ounces, quarts
    Us,
}

impl UnitSystem {
    /// Canonical token for this system
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Us => "us",
        }
    }

    /// Parse a persisted token, accepting only the literals `metric` / `us`
    ///
    /// Restoration rejects everything else so a corrupted store entry can
    /// never flip a session into an undefined system.
    #[must_use]
    pub fn parse_strict(token: &str) -> Option<Self> {
        match token {
            "metric" => Some(Self::Metric),
            "us" => Some(Self::Us),
            _ => None,
        }
    }
}

/// A single recipe ingredient as authored
///
/// An `amount` of exactly zero is the "to taste" sentinel: it is never
/// scaled or converted, and the view model renders it without a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Quantity in the authored unit (zero means "to taste")
    pub amount: f64,
    /// Unit of measurement (e.g., "g", "ml", "cups")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Ingredient name
    pub name: String,
    /// Optional preparation note (e.g., "minced", "softened, about 250g")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Ingredient {
    /// Create an ingredient without a note
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, unit: Option<&str>) -> Self {
        Self {
            amount,
            unit: unit.map(Into::into),
            name: name.into(),
            note: None,
        }
    }

    /// Attach a preparation note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// The recipe content a session operates on
///
/// Validated upstream by the content loader: every ingredient carries a
/// non-empty name and a non-negative amount, and the step list is ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeContent {
    /// URL slug identifying the recipe (scopes per-recipe preferences)
    pub slug: String,
    /// Recipe title
    pub title: String,
    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Ordered cooking steps
    pub steps: Vec<String>,
}

impl RecipeContent {
    /// Number of cooking steps
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// Display-ready ingredient row
///
/// An empty `display_amount` means the consumer should render a dash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientView {
    /// Ingredient name, passed through unmodified
    pub name: String,
    /// Scaled, converted, formatted amount (empty for the zero sentinel)
    pub display_amount: String,
    /// Unit token after conversion, or the authored unit when untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_unit: Option<String>,
    /// Note text after embedded-quantity rewriting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_note: Option<String>,
}

/// Snapshot of a session for the rendering collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    /// Recipe title
    pub title: String,
    /// Zero-based index of the current step
    pub step_index: usize,
    /// Total number of steps
    pub step_count: usize,
    /// Text of the current step
    pub step_text: String,
    /// Current serving count
    pub servings: u32,
    /// Active unit system
    pub unit_system: UnitSystem,
    /// Display-ready ingredient rows
    pub ingredients: Vec<IngredientView>,
}
