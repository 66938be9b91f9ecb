// ABOUTME: Embedded-quantity rewriting for free-text ingredient notes
// ABOUTME: Scans notes for quantity+unit substrings and converts them in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::models::UnitSystem;
use crate::units::convert;
use crate::units::format::format_amount;

/// Pattern matching a quantity followed by a convertible-unit token
///
/// The alternation lists long alias forms before their short tokens so
/// "fluid ounces" is never consumed as a bare "l" or "oz". Count-like units
/// (cups, spoons, pieces) are deliberately absent; they pass through with
/// the surrounding text.
fn quantity_pattern() -> Option<&'static Regex> {
    static QUANTITY_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    QUANTITY_REGEX
        .get_or_init(|| {
            Regex::new(
                r"(?i)\b(\d+(?:\.\d+)?)\s*(fluid ounces?|fl oz|milliliters?|millilitres?|kilograms?|liters?|litres?|grams?|ounces?|pounds?|quarts?|lbs?|kg|ml|oz|qt|g|l)\b",
            )
            .ok()
        })
        .as_ref()
}

/// Rewrite embedded quantities in a note for the target unit system
///
/// Text without a recognizable quantity+unit pair passes through unchanged.
/// Each match converts independently; ordering, punctuation, and spacing of
/// the surrounding text are preserved. Quantities already in the target
/// system (or attached to count-like units) are left untouched.
#[must_use]
pub fn convert_note(note: &str, target: UnitSystem) -> String {
    let Some(pattern) = quantity_pattern() else {
        return note.to_owned();
    };

    pattern
        .replace_all(note, |caps: &Captures<'_>| {
            let original = caps[0].to_owned();
            let Ok(amount) = caps[1].parse::<f64>() else {
                return original;
            };
            convert(amount, &caps[2], target).map_or(original, |converted| {
                format!("{} {}", format_amount(converted.amount), converted.unit)
            })
        })
        .into_owned()
}
