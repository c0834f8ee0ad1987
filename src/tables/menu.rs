use serde::Serialize;

use crate::error::{CalcError, Result};

/// Menu card for one calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculatorInfo {
    pub name: &'static str,
    pub route: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

const fn info(
    name: &'static str,
    route: &'static str,
    desc: &'static str,
    icon: &'static str,
    category: &'static str,
) -> CalculatorInfo {
    CalculatorInfo {
        name,
        route,
        desc,
        icon,
        category,
    }
}

pub const CALCULATORS: &[CalculatorInfo] = &[
    // Nutrition
    info("Protein Requirement", "protein", "Track daily protein intake vs. target", "🥩", "Nutrition"),
    info("Daily Calorie (TDEE)", "tdee", "Calculate BMR & daily calorie needs", "🔥", "Nutrition"),
    info("Macro Split", "macro", "Balance protein, carbs & fats", "🥗", "Nutrition"),
    info("Water Intake", "water", "Check daily hydration needs", "💧", "Nutrition"),
    info("Sugar Intake", "sugar", "Check safe vs risky sugar intake", "🍬", "Nutrition"),
    // Fitness & body
    info("BMI Calculator", "bmi", "Check BMI & body fat %", "⚖️", "Fitness"),
    info("Body Fat % Estimator", "bodyfat", "Estimate body fat %", "📉", "Fitness"),
    info("Ideal Weight (India)", "ideal_weight", "Find healthy weight range", "📏", "Fitness"),
    info("Calories Burned", "calories_burned", "By workout type", "🏃", "Fitness"),
    // Sleep & lifestyle
    info("Sleep Calculator", "sleep", "Best sleep/wake times", "🛌", "Sleep & Lifestyle"),
    info("Sleep Debt Calculator", "sleep_debt", "Track lost sleep", "⏰", "Sleep & Lifestyle"),
    info("Stress / Relaxation Score", "stress", "Check stress balance", "🧘", "Sleep & Lifestyle"),
    // Health trackers
    info("Blood Pressure Risk", "bp", "Check BP risk level", "💓", "Health"),
    info("Diabetes Risk", "diabetes", "Sugar + lifestyle risk", "🩸", "Health"),
    info("Alcohol Impact", "alcohol", "See alcohol effect", "🍺", "Health"),
];

/// Distinct categories, sorted.
pub fn categories() -> Vec<&'static str> {
    let mut cats: Vec<&'static str> = CALCULATORS.iter().map(|c| c.category).collect();
    cats.sort_unstable();
    cats.dedup();
    cats
}

pub fn in_category(category: &str) -> impl Iterator<Item = &'static CalculatorInfo> + '_ {
    CALCULATORS.iter().filter(move |c| c.category == category)
}

pub fn find_calculator(route: &str) -> Result<&'static CalculatorInfo> {
    CALCULATORS
        .iter()
        .find(|c| c.route == route)
        .ok_or_else(|| CalcError::UnknownCalculator(route.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_sorted_and_unique() {
        assert_eq!(
            categories(),
            vec!["Fitness", "Health", "Nutrition", "Sleep & Lifestyle"]
        );
    }

    #[test]
    fn test_every_calculator_in_a_category() {
        let total: usize = categories().iter().map(|c| in_category(c).count()).sum();
        assert_eq!(total, CALCULATORS.len());
    }

    #[test]
    fn test_find_calculator() {
        assert_eq!(find_calculator("bp").unwrap().name, "Blood Pressure Risk");
        assert!(matches!(
            find_calculator("tarot"),
            Err(CalcError::UnknownCalculator(_))
        ));
    }
}
