// ABOUTME: Serde contract tests for the content-loader ingredient format
// ABOUTME: Validates JSON deserialization, lowercase unit-system tokens, and view output
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Sous Chef Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sous_chef::models::{Ingredient, RecipeContent, UnitSystem};

#[test]
fn test_ingredients_deserialize_from_loader_json() {
    let raw = r#"[
        { "amount": 2, "unit": "cups", "name": "flour" },
        { "amount": 250, "unit": "g", "name": "butter", "note": "softened" },
        { "amount": 0, "name": "salt", "note": "to taste" }
    ]"#;

    let ingredients: Vec<Ingredient> = serde_json::from_str(raw).unwrap();
    assert_eq!(ingredients.len(), 3);
    assert_eq!(ingredients[0].unit.as_deref(), Some("cups"));
    assert_eq!(ingredients[1].note.as_deref(), Some("softened"));
    assert!((ingredients[2].amount - 0.0).abs() < f64::EPSILON);
    assert_eq!(ingredients[2].unit, None);
}

#[test]
fn test_recipe_round_trips_through_json() {
    let recipe = RecipeContent {
        slug: "dark-chocolate-olive-oil-cake".into(),
        title: "Dark Chocolate Olive Oil Cake".into(),
        ingredients: vec![Ingredient::new("cocoa", 60.0, Some("g"))],
        steps: vec!["Whisk the dry ingredients.".into()],
    };

    let encoded = serde_json::to_string(&recipe).unwrap();
    let decoded: RecipeContent = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, recipe);
}

#[test]
fn test_unit_system_uses_lowercase_tokens() {
    assert_eq!(serde_json::to_string(&UnitSystem::Metric).unwrap(), "\"metric\"");
    assert_eq!(serde_json::to_string(&UnitSystem::Us).unwrap(), "\"us\"");
    let parsed: UnitSystem = serde_json::from_str("\"us\"").unwrap();
    assert_eq!(parsed, UnitSystem::Us);
}

#[test]
fn test_absent_optionals_are_omitted_from_output() {
    let ingredient = Ingredient::new("salt", 0.0, None);
    let encoded = serde_json::to_string(&ingredient).unwrap();
    assert!(!encoded.contains("unit"));
    assert!(!encoded.contains("note"));
}
