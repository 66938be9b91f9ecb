// ABOUTME: Unit tests for the metric/US conversion engine
// ABOUTME: Covers the no-op, round-trip, and sentinel laws plus destination-unit selection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Sous Chef Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sous_chef::models::UnitSystem;
use sous_chef::units::{convert, format_amount, normalize_unit};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

/// Reduce any convertible weight to grams for round-trip comparison
fn to_grams(amount: f64, unit: &str) -> f64 {
    match unit {
        "g" => amount,
        "kg" => amount * 1000.0,
        "oz" => amount * 28.349_523_125,
        "lb" => amount * 453.592_37,
        other => panic!("not a weight unit: {other}"),
    }
}

/// Reduce any convertible volume to milliliters for round-trip comparison
fn to_milliliters(amount: f64, unit: &str) -> f64 {
    match unit {
        "ml" => amount,
        "l" => amount * 1000.0,
        "fl oz" => amount * 29.573_529_562_5,
        "qt" => amount * 946.352_946,
        other => panic!("not a volume unit: {other}"),
    }
}

#[test]
fn test_two_pounds_to_grams() {
    let converted = convert(2.0, "lb", UnitSystem::Metric).unwrap();
    assert_eq!(converted.unit, "g");
    assert_close(converted.amount, 907.18);
    assert_eq!(format_amount(converted.amount), "907.18");
}

#[test]
fn test_three_pounds_promote_to_kilograms() {
    let converted = convert(3.0, "lb", UnitSystem::Metric).unwrap();
    assert_eq!(converted.unit, "kg");
    assert_close(converted.amount, 1.36);
}

#[test]
fn test_250_grams_to_ounces() {
    let converted = convert(250.0, "g", UnitSystem::Us).unwrap();
    assert_eq!(converted.unit, "oz");
    assert_close(converted.amount, 8.82);
}

#[test]
fn test_quart_stays_milliliters_until_a_liter() {
    let one = convert(1.0, "qt", UnitSystem::Metric).unwrap();
    assert_eq!(one.unit, "ml");
    assert_close(one.amount, 946.35);

    let two = convert(2.0, "qt", UnitSystem::Metric).unwrap();
    assert_eq!(two.unit, "l");
    assert_close(two.amount, 1.89);
}

#[test]
fn test_sub_pound_kilograms_fall_back_to_ounces() {
    let converted = convert(0.4, "kg", UnitSystem::Us).unwrap();
    assert_eq!(converted.unit, "oz");
    assert_close(converted.amount, 14.11);

    let heavy = convert(2.0, "kg", UnitSystem::Us).unwrap();
    assert_eq!(heavy.unit, "lb");
    assert_close(heavy.amount, 4.41);
}

#[test]
fn test_sub_quart_liters_fall_back_to_fluid_ounces() {
    let converted = convert(0.5, "l", UnitSystem::Us).unwrap();
    assert_eq!(converted.unit, "fl oz");
    assert_close(converted.amount, 16.91);

    let big = convert(2.0, "l", UnitSystem::Us).unwrap();
    assert_eq!(big.unit, "qt");
    assert_close(big.amount, 2.11);
}

#[test]
fn test_no_op_when_unit_already_matches_target() {
    assert_eq!(convert(100.0, "g", UnitSystem::Metric), None);
    assert_eq!(convert(2.5, "kg", UnitSystem::Metric), None);
    assert_eq!(convert(8.0, "oz", UnitSystem::Us), None);
    assert_eq!(convert(1.0, "qt", UnitSystem::Us), None);
}

#[test]
fn test_zero_amount_is_the_sentinel() {
    assert_eq!(convert(0.0, "g", UnitSystem::Us), None);
    assert_eq!(convert(0.0, "lb", UnitSystem::Metric), None);
}

#[test]
fn test_empty_unit_is_not_converted() {
    assert_eq!(convert(1.0, "", UnitSystem::Metric), None);
    assert_eq!(convert(1.0, "   ", UnitSystem::Us), None);
}

#[test]
fn test_count_like_units_are_never_converted() {
    for unit in ["cup", "cups", "tsp", "tbsp", "egg", "eggs", "clove", "pcs"] {
        assert_eq!(convert(2.0, unit, UnitSystem::Metric), None, "unit {unit}");
        assert_eq!(convert(2.0, unit, UnitSystem::Us), None, "unit {unit}");
    }
}

#[test]
fn test_unknown_units_pass_through() {
    assert_eq!(convert(1.0, "pinch", UnitSystem::Metric), None);
    assert_eq!(convert(1.0, "bunch", UnitSystem::Us), None);
}

#[test]
fn test_aliases_resolve_before_conversion() {
    let converted = convert(1.0, "Pounds", UnitSystem::Metric).unwrap();
    assert_eq!(converted.unit, "g");
    assert_close(converted.amount, 453.59);

    let volume = convert(8.0, "Fluid Ounces", UnitSystem::Metric).unwrap();
    assert_eq!(volume.unit, "ml");
    assert_close(volume.amount, 236.59);

    assert_eq!(normalize_unit("Fluid Ounces"), "fl oz");
}

#[test]
fn test_weight_round_trip_preserves_mass() {
    for (amount, unit, native) in [
        (250.0, "g", UnitSystem::Metric),
        (0.5, "kg", UnitSystem::Metric),
        (3.0, "kg", UnitSystem::Metric),
        (8.0, "oz", UnitSystem::Us),
        (2.0, "lb", UnitSystem::Us),
        (5.0, "lb", UnitSystem::Us),
    ] {
        let target = match native {
            UnitSystem::Metric => UnitSystem::Us,
            UnitSystem::Us => UnitSystem::Metric,
        };
        let there = convert(amount, unit, target).unwrap();
        let back = convert(there.amount, there.unit, native).unwrap();
        let original_grams = to_grams(amount, unit);
        let round_trip_grams = to_grams(back.amount, back.unit);
        assert!(
            (original_grams - round_trip_grams).abs() / original_grams < 1e-9,
            "{amount} {unit}: {original_grams} g vs {round_trip_grams} g"
        );
        // No-op law: the original pair never converts toward its own system
        assert_eq!(convert(amount, unit, native), None);
    }
}

#[test]
fn test_volume_round_trip_preserves_volume() {
    for (amount, unit, native) in [
        (250.0, "ml", UnitSystem::Metric),
        (0.5, "l", UnitSystem::Metric),
        (2.0, "l", UnitSystem::Metric),
        (12.0, "fl oz", UnitSystem::Us),
        (1.0, "qt", UnitSystem::Us),
        (3.0, "qt", UnitSystem::Us),
    ] {
        let target = match native {
            UnitSystem::Metric => UnitSystem::Us,
            UnitSystem::Us => UnitSystem::Metric,
        };
        let there = convert(amount, unit, target).unwrap();
        let back = convert(there.amount, there.unit, native).unwrap();
        let original_ml = to_milliliters(amount, unit);
        let round_trip_ml = to_milliliters(back.amount, back.unit);
        assert!(
            (original_ml - round_trip_ml).abs() / original_ml < 1e-9,
            "{amount} {unit}: {original_ml} ml vs {round_trip_ml} ml"
        );
        assert_eq!(convert(amount, unit, native), None);
    }
}

#[test]
fn test_format_scenarios() {
    assert_eq!(format_amount(1.50), "1.5");
    assert_eq!(format_amount(2.00), "2");
    assert_eq!(format_amount(1.004), "1");
    assert_eq!(format_amount(0.0), "");
}

#[test]
fn test_format_idempotent_over_reparse() {
    for sample in [0.3, 1.004, 2.5, 8.818_490_5, 907.184_74, 16.0, 0.25] {
        let first = format_amount(sample);
        let reparsed: f64 = first.parse().unwrap();
        assert_eq!(format_amount(reparsed), first, "sample {sample}");
    }
}
