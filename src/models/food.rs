use serde::{Deserialize, Serialize};

/// A reference table row: nutrient content of one food.
///
/// `unit` is the basis `amount` applies to, e.g. "per 100g" or "per 1 piece".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientEntry {
    pub name: String,

    #[serde(alias = "protein", alias = "sugar")]
    pub amount: f64,

    pub unit: String,
}

impl NutrientEntry {
    pub fn new(name: &str, amount: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
        }
    }

    /// Non-empty name and a finite, non-negative amount.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.amount.is_finite() && self.amount >= 0.0
    }
}

/// One consumed food as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionLine {
    pub food_name: String,
    pub quantity: f64,
}

impl ConsumptionLine {
    pub fn new(food_name: &str, quantity: f64) -> Self {
        Self {
            food_name: food_name.to_string(),
            quantity,
        }
    }
}

/// Nutrient contributed by one recognised consumption line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientBreakdownItem {
    pub food_name: String,
    pub quantity: f64,
    /// Rounded to 2 decimals.
    pub amount: f64,
    pub unit: String,
}

/// Whether an aggregated total reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetStatus {
    Good,
    Low,
}

impl TargetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TargetStatus::Good => "Good",
            TargetStatus::Low => "Low",
        }
    }
}

/// Sum of a nutrient over a list of consumption lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Rounded to 2 decimals.
    pub total: f64,
    /// Unrounded sum, for callers that classify or re-round it.
    #[serde(skip)]
    pub raw_total: f64,
    pub target: Option<f64>,
    pub breakdown: Vec<NutrientBreakdownItem>,
    pub status: Option<TargetStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(NutrientEntry::new("Paneer", 18.0, "per 100g").is_valid());
        assert!(!NutrientEntry::new(" ", 18.0, "per 100g").is_valid());
        assert!(!NutrientEntry::new("Egg", -1.0, "per 1 piece").is_valid());
        assert!(!NutrientEntry::new("Egg", f64::NAN, "per 1 piece").is_valid());
    }

    #[test]
    fn test_entry_accepts_nutrient_named_field() {
        let json = r#"{"name": "Egg", "protein": 6, "unit": "per 1 piece"}"#;
        let entry: NutrientEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.amount, 6.0);
    }
}
