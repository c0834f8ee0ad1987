use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{CalcError, Result};
use crate::models::ConsumptionLine;
use crate::tables::NutrientTable;

/// Minimum Jaro-Winkler similarity for a food name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;
const MAX_SUGGESTIONS: usize = 5;

/// Table names resembling `input`, best match first.
pub fn suggest_matches<'a>(input: &str, names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&str, f64)> = names
        .into_iter()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(name, _)| name)
        .collect()
}

/// Case-insensitive exact lookup of a table name.
pub fn exact_match<'a>(input: &str, names: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let needle = input.trim().to_lowercase();
    names.into_iter().find(|name| name.to_lowercase() == needle)
}

/// Prompt for a number, falling back to `default` on empty input.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| CalcError::InvalidInput(format!("'{}' is not a number", input)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn resolve_food(input: &str, table: &NutrientTable) -> Result<Option<String>> {
    if let Some(name) = exact_match(input, table.names()) {
        return Ok(Some(name.to_string()));
    }

    let candidates = suggest_matches(input, table.names());
    match candidates.as_slice() {
        [] => {
            println!("No matching food found for '{}'", input);
            Ok(None)
        }
        [only] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", only), true)?;
            Ok(confirm.then(|| only.to_string()))
        }
        many => {
            let mut options: Vec<String> = many.iter().map(|n| n.to_string()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok((selection < many.len()).then(|| options[selection].clone()))
        }
    }
}

/// Collect consumption lines interactively until an empty food name.
pub fn prompt_consumption(table: &NutrientTable) -> Result<Vec<ConsumptionLine>> {
    let mut lines = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a food (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let Some(name) = resolve_food(input, table)? else {
            continue;
        };
        let unit = table.get(&name).map(|e| e.unit.as_str()).unwrap_or("");
        let quantity = prompt_number(&format!("Quantity of {} ({})", name, unit), 0.0)?;

        println!("Added: {} x {}", name, quantity);
        lines.push(ConsumptionLine::new(&name, quantity));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 5] = ["Chicken Breast", "Chickpeas", "Egg", "Egg White", "Paneer"];

    #[test]
    fn test_exact_match_ignores_case() {
        assert_eq!(exact_match("egg white", NAMES), Some("Egg White"));
        assert_eq!(exact_match("  PANEER ", NAMES), Some("Paneer"));
        assert_eq!(exact_match("tofu", NAMES), None);
    }

    #[test]
    fn test_suggestions_ranked_best_first() {
        let suggestions = suggest_matches("chiken brest", NAMES);
        assert_eq!(suggestions.first(), Some(&"Chicken Breast"));
    }

    #[test]
    fn test_no_suggestions_for_unrelated_input() {
        assert!(suggest_matches("xyz", NAMES).is_empty());
    }
}
