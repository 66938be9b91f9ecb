// ABOUTME: Unit conversion engine for recipe quantities
// ABOUTME: Normalizes unit tokens and converts amounts between metric and US systems
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

//! # Unit Conversion
//!
//! Metric ↔ US customary conversion for a fixed allow-list of weight and
//! volume tokens. Conversion is idempotent under a no-op round trip: an
//! amount whose unit already belongs to the target system returns `None`
//! rather than re-deriving an equivalent unit. Destination units are chosen
//! by magnitude so a person would naturally write the result: pounds over
//! a kilogram promote to kilograms, sub-pound weights fall back to ounces.

/// Display formatting for amounts
pub mod format;
/// Free-text note rewriting
pub mod notes;
/// Static factor and alias tables
pub mod table;

// Re-export the main entry points for convenience
pub use format::format_amount;
pub use notes::convert_note;
pub use table::{normalize_unit, UnitClass};

use crate::models::UnitSystem;
use table::{G_PER_KG, G_PER_LB, G_PER_OZ, ML_PER_FL_OZ, ML_PER_L, ML_PER_QT};

/// A converted amount and its destination unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converted {
    /// Converted amount, unrounded (formatting happens at display time)
    pub amount: f64,
    /// Canonical destination unit token
    pub unit: &'static str,
}

/// Convert an amount between unit systems
///
/// Returns `None` when no conversion applies: the amount is the zero
/// sentinel, the unit is empty, count-like, or unknown, or the unit's
/// native system already matches the target.
#[must_use]
pub fn convert(amount: f64, unit: &str, target: UnitSystem) -> Option<Converted> {
    if amount == 0.0 || unit.trim().is_empty() {
        return None;
    }

    let normalized = table::normalize_unit(unit);
    match table::classify(&normalized) {
        UnitClass::CountLike | UnitClass::Unknown => return None,
        UnitClass::Weight | UnitClass::Volume => {}
    }

    let native = table::native_system(&normalized)?;
    if native == target {
        return None;
    }

    match target {
        UnitSystem::Metric => to_metric(amount, &normalized),
        UnitSystem::Us => to_us(amount, &normalized),
    }
}

/// US → metric, choosing g/kg and ml/l by magnitude
fn to_metric(amount: f64, unit: &str) -> Option<Converted> {
    match unit {
        "oz" => Some(Converted {
            amount: amount * G_PER_OZ,
            unit: "g",
        }),
        "lb" => {
            let grams = amount * G_PER_LB;
            if grams >= 1000.0 {
                Some(Converted {
                    amount: grams / G_PER_KG,
                    unit: "kg",
                })
            } else {
                Some(Converted {
                    amount: grams,
                    unit: "g",
                })
            }
        }
        "fl oz" => Some(Converted {
            amount: amount * ML_PER_FL_OZ,
            unit: "ml",
        }),
        "qt" => {
            let milliliters = amount * ML_PER_QT;
            if milliliters >= 1000.0 {
                Some(Converted {
                    amount: milliliters / ML_PER_L,
                    unit: "l",
                })
            } else {
                Some(Converted {
                    amount: milliliters,
                    unit: "ml",
                })
            }
        }
        _ => None,
    }
}

/// Metric → US; sub-pound weights fall back to oz, sub-quart volumes to fl oz
fn to_us(amount: f64, unit: &str) -> Option<Converted> {
    match unit {
        "g" => Some(Converted {
            amount: amount / G_PER_OZ,
            unit: "oz",
        }),
        "kg" => {
            let grams = amount * G_PER_KG;
            let pounds = grams / G_PER_LB;
            if pounds >= 1.0 {
                Some(Converted {
                    amount: pounds,
                    unit: "lb",
                })
            } else {
                Some(Converted {
                    amount: grams / G_PER_OZ,
                    unit: "oz",
                })
            }
        }
        "ml" => Some(Converted {
            amount: amount / ML_PER_FL_OZ,
            unit: "fl oz",
        }),
        "l" => {
            let milliliters = amount * ML_PER_L;
            let quarts = milliliters / ML_PER_QT;
            if quarts >= 1.0 {
                Some(Converted {
                    amount: quarts,
                    unit: "qt",
                })
            } else {
                Some(Converted {
                    amount: milliliters / ML_PER_FL_OZ,
                    unit: "fl oz",
                })
            }
        }
        _ => None,
    }
}
