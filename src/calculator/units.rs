//! Unit basis handling for reference table figures.

use serde::Serialize;

/// What a table's `amount` is expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitBasis {
    /// Per 100 g or per 100 ml; quantities are grams or millilitres.
    PerHundred,
    /// Per piece, scoop, teaspoon or serving; quantities are counts.
    PerUnit,
}

impl UnitBasis {
    /// Classify a unit label such as "per 100g" or "per scoop (30g)".
    pub fn from_label(unit: &str) -> Self {
        if unit.contains("100g") || unit.contains("100ml") {
            UnitBasis::PerHundred
        } else {
            UnitBasis::PerUnit
        }
    }
}

/// Absolute nutrient amount for a consumed quantity.
///
/// Negative, NaN and infinite quantities count as zero.
pub fn normalize(amount_per_unit: f64, unit: &str, quantity: f64) -> f64 {
    let quantity = if quantity.is_finite() && quantity > 0.0 {
        quantity
    } else {
        0.0
    };

    match UnitBasis::from_label(unit) {
        UnitBasis::PerHundred => amount_per_unit * quantity / 100.0,
        UnitBasis::PerUnit => amount_per_unit * quantity,
    }
}

/// Round to `decimals` places, ties to even.
///
/// Rounds the exact binary value rather than `value * 10^decimals`, so
/// 0.175 (stored just below) gives 0.17 and 0.525 (stored just above) gives 0.53.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_basis_from_label() {
        assert_eq!(UnitBasis::from_label("per 100g"), UnitBasis::PerHundred);
        assert_eq!(UnitBasis::from_label("per 100ml"), UnitBasis::PerHundred);
        assert_eq!(UnitBasis::from_label("per scoop (30g)"), UnitBasis::PerUnit);
        assert_eq!(UnitBasis::from_label("per tsp (4g)"), UnitBasis::PerUnit);
        assert_eq!(UnitBasis::from_label("per 1 piece"), UnitBasis::PerUnit);
    }

    #[test]
    fn test_normalize_per_hundred() {
        assert!((normalize(18.0, "per 100g", 200.0) - 36.0).abs() < 1e-9);
        assert!((normalize(10.6, "per 100ml", 330.0) - 34.98).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_per_unit() {
        assert!((normalize(6.0, "per 1 piece", 3.0) - 18.0).abs() < 1e-9);
        assert!((normalize(24.0, "per scoop (30g)", 1.5) - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_degenerate_quantities() {
        assert_eq!(normalize(18.0, "per 100g", -50.0), 0.0);
        assert_eq!(normalize(18.0, "per 100g", f64::NAN), 0.0);
        assert_eq!(normalize(6.0, "per 1 piece", f64::INFINITY), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(22.857, 1), 22.9);
        assert_eq!(round_to(1673.75, 1), 1673.8);
        assert_eq!(round_to(2008.5, 0), 2008.0);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(-0.25, 1), -0.2);
    }

    #[test]
    fn test_round_to_uses_stored_value() {
        // (value, decimals, expected) as produced by Python's round().
        let cases = [
            (0.175, 2, 0.17),
            (0.525, 2, 0.53),
            (2.675, 2, 2.67),
            (1.005, 2, 1.0),
            (1.346, 1, 1.3),
            (26.204, 1, 26.2),
            (3.5 * 5.0 / 100.0, 2, 0.17),
            (3.5 * 15.0 / 100.0, 2, 0.53),
        ];
        for (value, decimals, expected) in cases {
            assert_eq!(round_to(value, decimals), expected, "round_to({}, {})", value, decimals);
        }
    }

    #[test]
    fn test_round_to_non_finite_passthrough() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 1), f64::INFINITY);
    }
}
