//! Energy balance: BMR, TDEE, macro split, exercise burn and hydration.

use serde::Serialize;

use crate::calculator::bands::{Band, Bands, Category};
use crate::calculator::constants::*;
use crate::calculator::scale::pointer_pct;
use crate::calculator::units::round_to;
use crate::error::{Result, ensure_finite};
use crate::models::{ActivityLevel, CalorieGoal, Climate, Gender, HydrationActivity};
use crate::tables::met_for;

/// Body measurements feeding the BMR formula.
#[derive(Debug, Clone, Copy)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
}

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day.
pub fn bmr(profile: &BodyProfile) -> f64 {
    let constant = if profile.gender.is_male() {
        BMR_MALE_CONSTANT
    } else {
        BMR_FEMALE_CONSTANT
    };
    BMR_WEIGHT_COEF * profile.weight_kg + BMR_HEIGHT_COEF * profile.height_cm
        - BMR_AGE_COEF * profile.age as f64
        + constant
}

/// Total daily energy expenditure, kcal/day.
pub fn tdee(profile: &BodyProfile, activity: ActivityLevel) -> f64 {
    bmr(profile) * activity.factor()
}

#[derive(Debug, Clone, Serialize)]
pub struct TdeeReport {
    pub bmr: f64,
    pub tdee: f64,
    pub activity: String,
}

pub fn calculate_tdee(profile: &BodyProfile, activity: ActivityLevel) -> Result<TdeeReport> {
    let bmr = ensure_finite(bmr(profile), "BMR")?;
    Ok(TdeeReport {
        bmr: round_to(bmr, 1),
        tdee: round_to(bmr * activity.factor(), 0),
        activity: activity.display_name().to_string(),
    })
}

/// Daily calories and macronutrient grams.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroSplit {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub protein_pct: u32,
    pub carbs_pct: u32,
    pub fat_pct: u32,
}

/// Split goal-adjusted TDEE into protein, carbs and fat.
pub fn macro_split(
    profile: &BodyProfile,
    activity: ActivityLevel,
    goal: CalorieGoal,
) -> Result<MacroSplit> {
    let calories = ensure_finite(tdee(profile, activity) + goal.adjustment(), "calories")?;

    Ok(MacroSplit {
        calories: round_to(calories, 0),
        protein: round_to(calories * MACRO_PROTEIN_SHARE / KCAL_PER_G_PROTEIN, 1),
        carbs: round_to(calories * MACRO_CARBS_SHARE / KCAL_PER_G_CARBS, 1),
        fat: round_to(calories * MACRO_FAT_SHARE / KCAL_PER_G_FAT, 1),
        protein_pct: (MACRO_PROTEIN_SHARE * 100.0) as u32,
        carbs_pct: (MACRO_CARBS_SHARE * 100.0) as u32,
        fat_pct: (MACRO_FAT_SHARE * 100.0) as u32,
    })
}

/// Gauge for the calorie burn: position on 0..1000 kcal and milestones.
#[derive(Debug, Clone, Serialize)]
pub struct BurnScale {
    pub pointer_pct: f64,
    pub milestones: Vec<f64>,
    pub max_cal: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaloriesBurnedReport {
    pub exercise: String,
    pub met: f64,
    pub calories: f64,
    pub cal_per_min: f64,
    pub food_eq: Vec<String>,
    pub scale: BurnScale,
}

/// kcal burned: MET × 3.5 × kg / 200 per minute.
pub fn calories_burned(met: f64, weight_kg: f64, minutes: f64) -> f64 {
    met * 3.5 * weight_kg / 200.0 * minutes
}

pub fn calculate_calories_burned(
    exercise: &str,
    weight_kg: f64,
    minutes: f64,
) -> Result<CaloriesBurnedReport> {
    let met = met_for(exercise).unwrap_or(DEFAULT_MET);
    let calories = round_to(
        ensure_finite(calories_burned(met, weight_kg, minutes), "calories")?,
        1,
    );
    let cal_per_min = if minutes > 0.0 {
        round_to(calories / minutes, 1)
    } else {
        0.0
    };

    let mut food_eq = Vec::new();
    if calories > 0.0 {
        food_eq.push(format!(
            "{:?} 🍕 slices ({} kcal each)",
            round_to(calories / PIZZA_SLICE_KCAL, 1),
            PIZZA_SLICE_KCAL
        ));
        food_eq.push(format!(
            "{:?} 🍫 bars ({} kcal each)",
            round_to(calories / CHOCOLATE_BAR_KCAL, 1),
            CHOCOLATE_BAR_KCAL
        ));
        food_eq.push(format!(
            "{:?} 🍺 beers ({} kcal each)",
            round_to(calories / BEER_KCAL, 1),
            BEER_KCAL
        ));
    }

    Ok(CaloriesBurnedReport {
        exercise: exercise.to_string(),
        met,
        calories,
        cal_per_min,
        food_eq,
        scale: BurnScale {
            pointer_pct: round_to(pointer_pct(calories, 0.0, BURN_SCALE_MAX), 2),
            milestones: BURN_MILESTONES.to_vec(),
            max_cal: BURN_SCALE_MAX,
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HydrationLevel {
    Low,
    Good,
    High,
}

impl Category for HydrationLevel {
    fn label(&self) -> &'static str {
        match self {
            HydrationLevel::Low => "Low",
            HydrationLevel::Good => "Good",
            HydrationLevel::High => "High",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            HydrationLevel::Low => "Hydration is on the lower side. Ensure at least 2 L daily.",
            HydrationLevel::Good => {
                "Good hydration target. Spread intake evenly throughout the day."
            }
            HydrationLevel::High => {
                "High hydration need — make sure to drink frequently, especially around workouts."
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HydrationInput {
    pub weight_kg: f64,
    pub activity: HydrationActivity,
    pub climate: Climate,
    pub coffee_cups: u32,
    pub alcoholic_drinks: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HydrationReport {
    pub liters: f64,
    pub recommendation: String,
    pub level: HydrationLevel,
    pub advice: String,
    pub distribution: Vec<(String, f64)>,
}

/// Daily water need in millilitres.
pub fn water_ml(input: &HydrationInput) -> f64 {
    let climate = match input.climate {
        Climate::Hot => HOT_CLIMATE_ML,
        Climate::Cool => COOL_CLIMATE_ML,
        Climate::Temperate => 0.0,
    };
    input.weight_kg * input.activity.ml_per_kg()
        + climate
        + input.coffee_cups as f64 * ML_PER_COFFEE
        + input.alcoholic_drinks as f64 * ML_PER_ALCOHOLIC_DRINK
}

pub fn calculate_hydration(input: &HydrationInput) -> Result<HydrationReport> {
    let liters = round_to(ensure_finite(water_ml(input), "water intake")? / 1000.0, 2);

    let level = Bands::new(
        vec![
            Band::below(2.0, HydrationLevel::Low),
            Band::at_most(3.5, HydrationLevel::Good),
        ],
        HydrationLevel::High,
    )
    .classify(liters);

    let distribution = HYDRATION_SCHEDULE
        .iter()
        .map(|&(slot, share)| (slot.to_string(), round_to(liters * share, 2)))
        .collect();

    Ok(HydrationReport {
        liters,
        recommendation: format!("{:?} L per day", liters),
        level,
        advice: level.advice().to_string(),
        distribution,
    })
}
