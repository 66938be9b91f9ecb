// ABOUTME: View-model assembly for the rendering collaborator
// ABOUTME: Runs the scale → convert → note-rewrite → format display pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

use crate::config::SessionConfig;
use crate::models::{Ingredient, IngredientView, RecipeContent, SessionView, UnitSystem};
use crate::scaling::{scale_factor, scale_ingredients};
use crate::units::format::format_amount;
use crate::units::notes::convert_note;
use crate::units::convert;

/// Build the display-ready snapshot for the current session state
pub(super) fn build_view(
    config: &SessionConfig,
    recipe: &RecipeContent,
    step_index: usize,
    servings: u32,
    unit_system: UnitSystem,
) -> SessionView {
    let factor = if config.scaling_enabled {
        scale_factor(config.base_servings, servings)
    } else {
        1.0
    };
    let scaled = scale_ingredients(&recipe.ingredients, factor);

    let ingredients = scaled
        .iter()
        .map(|ingredient| ingredient_view(ingredient, config, unit_system))
        .collect();

    SessionView {
        title: recipe.title.clone(),
        step_index,
        step_count: recipe.step_count(),
        step_text: recipe.steps.get(step_index).cloned().unwrap_or_default(),
        servings,
        unit_system,
        ingredients,
    }
}

fn ingredient_view(
    ingredient: &Ingredient,
    config: &SessionConfig,
    unit_system: UnitSystem,
) -> IngredientView {
    let mut amount = ingredient.amount;
    let mut unit = ingredient.unit.clone();

    if config.unit_toggle_enabled {
        if let Some(authored) = ingredient.unit.as_deref() {
            if let Some(converted) = convert(amount, authored, unit_system) {
                amount = converted.amount;
                unit = Some(converted.unit.to_owned());
            }
        }
    }

    let note = if config.unit_toggle_enabled {
        ingredient
            .note
            .as_deref()
            .map(|note| convert_note(note, unit_system))
    } else {
        ingredient.note.clone()
    };

    IngredientView {
        name: ingredient.name.clone(),
        display_amount: format_amount(amount),
        display_unit: unit,
        display_note: note,
    }
}
