use crate::calculator::units::{normalize, round_to};
use crate::models::{AggregateResult, ConsumptionLine, NutrientBreakdownItem, TargetStatus};
use crate::tables::NutrientTable;

/// Sum a nutrient over consumption lines using a reference table.
///
/// Lines naming a food missing from the table are skipped. The breakdown keeps
/// input order, amounts and total are rounded to 2 decimals, and the status
/// compares the unrounded total against `target` when one is given.
pub fn aggregate(
    table: &NutrientTable,
    lines: &[ConsumptionLine],
    target: Option<f64>,
) -> AggregateResult {
    let mut total = 0.0;
    let mut breakdown = Vec::with_capacity(lines.len());

    for line in lines {
        let Some(entry) = table.get(&line.food_name) else {
            tracing::debug!(food = %line.food_name, "skipping food missing from table");
            continue;
        };

        let amount = normalize(entry.amount, &entry.unit, line.quantity);
        total += amount;
        breakdown.push(NutrientBreakdownItem {
            food_name: entry.name.clone(),
            quantity: line.quantity,
            amount: round_to(amount, 2),
            unit: entry.unit.clone(),
        });
    }

    let status = target.map(|t| {
        if total >= t {
            TargetStatus::Good
        } else {
            TargetStatus::Low
        }
    });

    AggregateResult {
        total: round_to(total, 2),
        raw_total: total,
        target,
        breakdown,
        status,
    }
}
