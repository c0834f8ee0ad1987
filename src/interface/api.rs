//! JSON contract for the protein calculator.
//!
//! Request: `{"weight", "goal", "items": [{"item", "quantity"}]}`.
//! Response: `{"total_protein", "target", "status", "breakdown": [{"item", "qty", "protein", "unit"}]}`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::calculator::{ProteinInput, ProteinReport, calculate_protein};
use crate::error::Result;
use crate::models::{ConsumptionLine, ProteinGoal, TargetStatus};
use crate::tables::NutrientTable;

/// Accept a JSON number, a numeric string, or nothing; anything else is 0.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiItem {
    #[serde(default)]
    pub item: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quantity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProteinRequest {
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: f64,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub items: Vec<ApiItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiBreakdownItem {
    pub item: String,
    pub qty: f64,
    pub protein: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProteinResponse {
    pub total_protein: f64,
    pub target: f64,
    pub status: TargetStatus,
    pub breakdown: Vec<ApiBreakdownItem>,
}

impl From<ProteinReport> for ProteinResponse {
    fn from(report: ProteinReport) -> Self {
        Self {
            total_protein: report.total_protein,
            target: report.target,
            status: report.status,
            breakdown: report
                .breakdown
                .into_iter()
                .map(|b| ApiBreakdownItem {
                    item: b.food_name,
                    qty: b.quantity,
                    protein: b.amount,
                    unit: b.unit,
                })
                .collect(),
        }
    }
}

impl ProteinRequest {
    pub fn into_input(self) -> ProteinInput {
        ProteinInput {
            weight_kg: self.weight,
            goal: ProteinGoal::from_input(&self.goal).unwrap_or_default(),
            lines: self
                .items
                .into_iter()
                .map(|i| ConsumptionLine::new(&i.item, i.quantity))
                .collect(),
        }
    }
}

/// Parse a request body, run the calculator and return the response body.
pub fn handle_protein_json(table: &NutrientTable, body: &str) -> Result<String> {
    let request: ProteinRequest = serde_json::from_str(body)?;
    let report = calculate_protein(table, &request.into_input())?;
    Ok(serde_json::to_string(&ProteinResponse::from(report))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::PROTEIN_TABLE;

    #[test]
    fn test_lenient_numbers() {
        let request: ProteinRequest = serde_json::from_str(
            r#"{"weight": "72.5", "goal": "muscle_gain",
                "items": [{"item": "Egg", "quantity": "3"}, {"item": "Tofu"}]}"#,
        )
        .unwrap();
        assert_eq!(request.weight, 72.5);
        assert_eq!(request.items[0].quantity, 3.0);
        assert_eq!(request.items[1].quantity, 0.0);
    }

    #[test]
    fn test_bad_number_string_is_zero() {
        let request: ProteinRequest =
            serde_json::from_str(r#"{"weight": "heavy", "items": []}"#).unwrap();
        assert_eq!(request.weight, 0.0);
        assert_eq!(request.goal, "");
    }

    #[test]
    fn test_response_field_names() {
        let body = handle_protein_json(
            &PROTEIN_TABLE,
            r#"{"weight": 60, "goal": "maintenance", "items": [{"item": "Egg", "quantity": 2}]}"#,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["total_protein"], 12.0);
        assert_eq!(value["target"], 108.0);
        assert_eq!(value["status"], "Low");
        assert_eq!(value["breakdown"][0]["item"], "Egg");
        assert_eq!(value["breakdown"][0]["qty"], 2.0);
        assert_eq!(value["breakdown"][0]["protein"], 12.0);
        assert!(value["breakdown"][0]["unit"].is_string());
    }

    #[test]
    fn test_malformed_body_is_json_error() {
        assert!(matches!(
            handle_protein_json(&PROTEIN_TABLE, "{not json"),
            Err(crate::error::CalcError::Json(_))
        ));
    }
}
