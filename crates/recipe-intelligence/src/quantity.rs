// ABOUTME: Reconciles free-text ingredient quantities into numeric amount and unit
// ABOUTME: Used when persisting generated recipes whose quantities are plain strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use recipe_core::constants::synthesis::{DEFAULT_AMOUNT, DEFAULT_UNIT};
use regex::Regex;
use serde::{Deserialize, Serialize};

static AMOUNT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)").ok());

static AMOUNT_UNIT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)\s+([a-zA-Z]+)").ok());

/// Numeric amount and unit extracted from a free-text quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledQuantity {
    /// Parsed amount, `1.0` when no number is present
    pub amount: f64,
    /// Lower-cased unit
    pub unit: String,
}

/// Reconcile a free-text quantity such as `"2 cups"` or `"to taste"`
///
/// The amount is the first numeric token. The unit is the alphabetic word
/// immediately following a number; when none is present the catalog unit
/// (`default_unit`) is used, then `"unit"`.
#[must_use]
pub fn reconcile_quantity(quantity: &str, default_unit: Option<&str>) -> ReconciledQuantity {
    let amount = AMOUNT_PATTERN
        .as_ref()
        .and_then(|re| re.captures(quantity))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(DEFAULT_AMOUNT);

    let unit = AMOUNT_UNIT_PATTERN
        .as_ref()
        .and_then(|re| re.captures(quantity))
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_lowercase())
        .or_else(|| default_unit.map(str::to_lowercase))
        .unwrap_or_else(|| DEFAULT_UNIT.to_owned());

    ReconciledQuantity { amount, unit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_unit() {
        let q = reconcile_quantity("2 Cups", None);
        assert!((q.amount - 2.0).abs() < f64::EPSILON);
        assert_eq!(q.unit, "cups");

        let q = reconcile_quantity("about 1.5 tablespoons, chopped", Some("grams"));
        assert!((q.amount - 1.5).abs() < f64::EPSILON);
        assert_eq!(q.unit, "tablespoons");
    }

    #[test]
    fn test_defaults_when_text_has_no_number() {
        let q = reconcile_quantity("to taste", Some("pinch"));
        assert!((q.amount - 1.0).abs() < f64::EPSILON);
        assert_eq!(q.unit, "pinch");

        let q = reconcile_quantity("as needed", None);
        assert!((q.amount - 1.0).abs() < f64::EPSILON);
        assert_eq!(q.unit, "unit");
    }

    #[test]
    fn test_bare_number_uses_catalog_unit() {
        let q = reconcile_quantity("300", Some("Grams"));
        assert!((q.amount - 300.0).abs() < f64::EPSILON);
        assert_eq!(q.unit, "grams");
    }
}
