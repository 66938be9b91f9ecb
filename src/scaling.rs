// ABOUTME: Serving-count scaling arithmetic for ingredient amounts
// ABOUTME: Derives a scale factor and applies it across an ingredient list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

//! # Serving Scaling
//!
//! Pure arithmetic applied before unit conversion in the display pipeline.
//! Order matters: conversion's "already matches the target system" check
//! operates on the scaled amount, not the authored one.

use crate::models::Ingredient;

/// Derive the scale factor for a requested serving count
///
/// `base_servings` is validated to be at least 1 at configuration time; a
/// zero base still yields the identity factor rather than dividing by zero.
#[must_use]
pub fn scale_factor(base_servings: u32, current_servings: u32) -> f64 {
    if base_servings == 0 {
        return 1.0;
    }
    f64::from(current_servings) / f64::from(base_servings)
}

/// Scale every ingredient amount by the factor
///
/// Units, names, and note text pass through unscaled; embedded note
/// quantities are rewritten by conversion, never by scaling. The zero
/// "to taste" sentinel stays zero under any factor.
#[must_use]
pub fn scale_ingredients(ingredients: &[Ingredient], factor: f64) -> Vec<Ingredient> {
    ingredients
        .iter()
        .map(|ingredient| Ingredient {
            amount: ingredient.amount * factor,
            ..ingredient.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_base_servings() {
        let ingredients = vec![
            Ingredient::new("flour", 2.0, Some("cup")),
            Ingredient::new("salt", 0.0, None),
        ];
        let scaled = scale_ingredients(&ingredients, scale_factor(4, 4));
        assert_eq!(scaled, ingredients);
    }

    #[test]
    fn test_linear_in_current_servings() {
        let ingredients = vec![Ingredient::new("flour", 2.0, Some("cup"))];
        let doubled = scale_ingredients(&ingredients, scale_factor(4, 8));
        assert!((doubled[0].amount - 4.0).abs() < f64::EPSILON);
        assert_eq!(doubled[0].unit.as_deref(), Some("cup"));
        assert_eq!(doubled[0].name, "flour");

        let halved = scale_ingredients(&ingredients, scale_factor(4, 2));
        assert!((halved[0].amount - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_sentinel_stays_zero() {
        let ingredients = vec![Ingredient::new("salt", 0.0, None).with_note("to taste")];
        let scaled = scale_ingredients(&ingredients, scale_factor(4, 16));
        assert!((scaled[0].amount - 0.0).abs() < f64::EPSILON);
        assert_eq!(scaled[0].note.as_deref(), Some("to taste"));
    }

    #[test]
    fn test_zero_base_yields_identity_factor() {
        assert!((scale_factor(0, 8) - 1.0).abs() < f64::EPSILON);
    }
}
