// ABOUTME: Static conversion-factor and alias tables for recipe units
// ABOUTME: Canonical tokens, metric/US classification, and normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::UnitSystem;

/// Grams per ounce
pub const G_PER_OZ: f64 = 28.349523125;

/// Grams per pound
pub const G_PER_LB: f64 = 453.59237;

/// Milliliters per fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735295625;

/// Milliliters per quart
pub const ML_PER_QT: f64 = 946.352946;

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;

/// Milliliters per liter
pub const ML_PER_L: f64 = 1000.0;

/// Alias map normalizing plural and long unit forms to canonical short tokens
static UNIT_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Metric weight
    m.insert("gram", "g");
    m.insert("grams", "g");
    m.insert("kilogram", "kg");
    m.insert("kilograms", "kg");

    // US weight
    m.insert("ounce", "oz");
    m.insert("ounces", "oz");
    m.insert("pound", "lb");
    m.insert("pounds", "lb");
    m.insert("lbs", "lb");

    // Metric volume
    m.insert("milliliter", "ml");
    m.insert("milliliters", "ml");
    m.insert("millilitre", "ml");
    m.insert("millilitres", "ml");
    m.insert("litre", "l");
    m.insert("litres", "l");
    m.insert("liter", "l");
    m.insert("liters", "l");

    // US volume
    m.insert("fluid ounce", "fl oz");
    m.insert("fluid ounces", "fl oz");
    m.insert("quart", "qt");
    m.insert("quarts", "qt");

    // Spoons keep their short form; both systems read them the same
    m.insert("teaspoon", "tsp");
    m.insert("teaspoons", "tsp");
    m.insert("tablespoon", "tbsp");
    m.insert("tablespoons", "tbsp");

    m
});

/// Units with a defined metric↔US factor
const CONVERTIBLE_UNITS: &[&str] = &["g", "kg", "oz", "lb", "ml", "l", "fl oz", "qt"];

/// Count-like units that never convert between systems
const COUNT_UNITS: &[&str] = &[
    "pcs", "piece", "pieces", "clove", "cloves", "egg", "eggs", "cup", "cups", "tsp", "tbsp",
];

/// Derived class of a normalized unit token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    /// Convertible weight (g, kg, oz, lb)
    Weight,
    /// Convertible volume (ml, l, fl oz, qt)
    Volume,
    /// Discrete count (pieces, cloves, eggs, cups, spoons)
    CountLike,
    /// Outside the allow-list; passed through untouched
    Unknown,
}

/// Normalize a unit token: trim, lowercase, resolve aliases
#[must_use]
pub fn normalize_unit(unit: &str) -> String {
    let trimmed = unit.trim().to_lowercase();
    UNIT_ALIASES
        .get(trimmed.as_str())
        .map_or(trimmed, |canonical| (*canonical).to_owned())
}

/// Classify a normalized unit token
#[must_use]
pub fn classify(normalized: &str) -> UnitClass {
    if COUNT_UNITS.contains(&normalized) {
        return UnitClass::CountLike;
    }
    if !CONVERTIBLE_UNITS.contains(&normalized) {
        return UnitClass::Unknown;
    }
    match normalized {
        "g" | "kg" | "oz" | "lb" => UnitClass::Weight,
        _ => UnitClass::Volume,
    }
}

/// Native measurement system of a normalized convertible token
#[must_use]
pub fn native_system(normalized: &str) -> Option<UnitSystem> {
    match normalized {
        "g" | "kg" | "ml" | "l" => Some(UnitSystem::Metric),
        "oz" | "lb" | "fl oz" | "qt" => Some(UnitSystem::Us),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_resolves_aliases() {
        assert_eq!(normalize_unit("Grams"), "g");
        assert_eq!(normalize_unit("  Pounds  "), "lb");
        assert_eq!(normalize_unit("Fluid Ounces"), "fl oz");
        assert_eq!(normalize_unit("litre"), "l");
        assert_eq!(normalize_unit("tablespoons"), "tbsp");
    }

    #[test]
    fn test_normalize_passes_unknown_tokens_through() {
        assert_eq!(normalize_unit("pinch"), "pinch");
        assert_eq!(normalize_unit(""), "");
    }

    #[test]
    fn test_classify_partitions_the_vocabulary() {
        assert_eq!(classify("g"), UnitClass::Weight);
        assert_eq!(classify("lb"), UnitClass::Weight);
        assert_eq!(classify("ml"), UnitClass::Volume);
        assert_eq!(classify("fl oz"), UnitClass::Volume);
        assert_eq!(classify("cup"), UnitClass::CountLike);
        assert_eq!(classify("tsp"), UnitClass::CountLike);
        assert_eq!(classify("eggs"), UnitClass::CountLike);
        assert_eq!(classify("pinch"), UnitClass::Unknown);
    }

    #[test]
    fn test_native_system_split() {
        assert_eq!(native_system("kg"), Some(UnitSystem::Metric));
        assert_eq!(native_system("l"), Some(UnitSystem::Metric));
        assert_eq!(native_system("qt"), Some(UnitSystem::Us));
        assert_eq!(native_system("oz"), Some(UnitSystem::Us));
        assert_eq!(native_system("cup"), None);
    }
}
