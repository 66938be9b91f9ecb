// ABOUTME: Canonical numeric-to-display formatting for ingredient amounts
// ABOUTME: Two-decimal rounding, integer snapping, and trailing-zero stripping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

/// Format an amount for display
///
/// - zero yields an empty string (the consumer renders a dash)
/// - rounds to at most two decimals
/// - a result within 0.01 of an integer snaps to that integer, absorbing
///   float noise from conversion arithmetic
/// - trailing fractional zeros are stripped (`1.50` → `"1.5"`, `2.00` → `"2"`)
/// - never yields `"-0"`
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return String::new();
    }

    let mut rounded = (amount * 100.0).round() / 100.0;
    if (rounded - rounded.round()).abs() < 0.01 {
        rounded = rounded.round();
    }
    if rounded == 0.0 {
        return String::new();
    }

    let fixed = format!("{rounded:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}
