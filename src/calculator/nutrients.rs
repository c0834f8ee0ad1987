//! Protein and sugar intake calculators built on the aggregator.

use serde::Serialize;

use crate::calculator::aggregate::aggregate;
use crate::calculator::bands::{Band, Bands, Category};
use crate::calculator::constants::*;
use crate::calculator::units::round_to;
use crate::error::Result;
use crate::models::{ConsumptionLine, NutrientBreakdownItem, ProteinGoal, TargetStatus};
use crate::tables::NutrientTable;

#[derive(Debug, Clone)]
pub struct ProteinInput {
    pub weight_kg: f64,
    pub goal: ProteinGoal,
    pub lines: Vec<ConsumptionLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProteinReport {
    pub total_protein: f64,
    pub target: f64,
    pub status: TargetStatus,
    pub breakdown: Vec<NutrientBreakdownItem>,
}

/// Daily protein target in grams, rounded to 1 decimal.
pub fn protein_target(weight_kg: f64, goal: ProteinGoal) -> f64 {
    round_to(weight_kg * goal.grams_per_kg(), 1)
}

pub fn calculate_protein(table: &NutrientTable, input: &ProteinInput) -> Result<ProteinReport> {
    let target = protein_target(input.weight_kg, input.goal);
    let result = aggregate(table, &input.lines, Some(target));

    Ok(ProteinReport {
        total_protein: result.total,
        target,
        status: result.status.unwrap_or(TargetStatus::Low),
        breakdown: result.breakdown,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SugarStatus {
    Safe,
    Moderate,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl Category for SugarStatus {
    fn label(&self) -> &'static str {
        match self {
            SugarStatus::Safe => "Safe",
            SugarStatus::Moderate => "Moderate",
            SugarStatus::HighRisk => "High Risk",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            SugarStatus::Safe => "Excellent — within WHO ideal limit (<5% of daily calories).",
            SugarStatus::Moderate => "Within 10% safe upper limit. Try cutting down a little.",
            SugarStatus::HighRisk => {
                "Too much sugar — linked with obesity, diabetes, and heart risk."
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SugarInput {
    pub weight_kg: f64,
    pub lines: Vec<ConsumptionLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SugarReport {
    pub total_sugar: f64,
    pub max_safe: f64,
    pub max_limit: f64,
    pub sugar_pct: f64,
    pub status: SugarStatus,
    pub advice: String,
    pub breakdown: Vec<NutrientBreakdownItem>,
}

/// Estimated daily calories the sugar allowance is based on.
pub fn sugar_daily_calories(weight_kg: f64) -> f64 {
    (weight_kg * SUGAR_KCAL_PER_KG).max(SUGAR_MIN_DAILY_KCAL)
}

pub fn calculate_sugar(table: &NutrientTable, input: &SugarInput) -> Result<SugarReport> {
    // Zero and negative quantities are left out of the breakdown entirely.
    let lines: Vec<ConsumptionLine> = input
        .lines
        .iter()
        .filter(|l| l.quantity > 0.0)
        .cloned()
        .collect();
    let result = aggregate(table, &lines, None);
    let total = result.raw_total;

    let daily_calories = sugar_daily_calories(input.weight_kg);
    let max_safe = round_to(SUGAR_IDEAL_SHARE * daily_calories / KCAL_PER_G_SUGAR, 1);
    let max_limit = round_to(SUGAR_UPPER_SHARE * daily_calories / KCAL_PER_G_SUGAR, 1);

    let bands = Bands::new(
        vec![
            Band::at_most(max_safe, SugarStatus::Safe),
            Band::at_most(max_limit, SugarStatus::Moderate),
        ],
        SugarStatus::HighRisk,
    );
    let status = bands.classify(total);

    Ok(SugarReport {
        total_sugar: round_to(total, 1),
        max_safe,
        max_limit,
        sugar_pct: round_to(total * KCAL_PER_G_SUGAR / daily_calories * 100.0, 1),
        status,
        advice: status.advice().to_string(),
        breakdown: result.breakdown,
    })
}
