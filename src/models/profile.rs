//! Categorical inputs shared by the calculators.
//!
//! Every enum parses leniently through `from_input`, returning `None` for
//! strings it does not recognise; callers fall back to the `Default` variant.

use serde::{Deserialize, Serialize};

use crate::calculator::constants::{CM_PER_INCH, INCHES_PER_FOOT};
use crate::calculator::round_to;

/// Biological sex used by the sex-specific formulas.
///
/// Anything other than "male" selects the non-male coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    Female,
}

impl Gender {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn is_male(&self) -> bool {
        matches!(self, Gender::Male)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Daily activity level for TDEE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    /// TDEE multiplier applied to BMR.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }
}

/// Goal driving the daily protein target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProteinGoal {
    FatLoss,
    #[default]
    Maintenance,
    MuscleGain,
}

impl ProteinGoal {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "fat-loss" => Some(ProteinGoal::FatLoss),
            "maintenance" => Some(ProteinGoal::Maintenance),
            "muscle-gain" => Some(ProteinGoal::MuscleGain),
            _ => None,
        }
    }

    /// Grams of protein per kg of body weight.
    pub fn grams_per_kg(&self) -> f64 {
        match self {
            ProteinGoal::FatLoss => 1.6,
            ProteinGoal::Maintenance => 1.8,
            ProteinGoal::MuscleGain => 2.0,
        }
    }
}

/// Calorie goal for the macro split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalorieGoal {
    Cut,
    #[default]
    Maintain,
    Bulk,
}

impl CalorieGoal {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cut" => Some(CalorieGoal::Cut),
            "maintain" => Some(CalorieGoal::Maintain),
            "bulk" => Some(CalorieGoal::Bulk),
            _ => None,
        }
    }

    /// kcal added to TDEE.
    pub fn adjustment(&self) -> f64 {
        match self {
            CalorieGoal::Cut => -500.0,
            CalorieGoal::Maintain => 0.0,
            CalorieGoal::Bulk => 300.0,
        }
    }
}

/// Activity level for the hydration estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HydrationActivity {
    Low,
    #[default]
    Moderate,
    High,
}

impl HydrationActivity {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(HydrationActivity::Low),
            "moderate" => Some(HydrationActivity::Moderate),
            "high" => Some(HydrationActivity::High),
            _ => None,
        }
    }

    pub fn ml_per_kg(&self) -> f64 {
        match self {
            HydrationActivity::Low => 30.0,
            HydrationActivity::Moderate => 35.0,
            HydrationActivity::High => 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    Hot,
    #[default]
    Temperate,
    Cool,
}

impl Climate {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hot" => Some(Climate::Hot),
            "temperate" | "normal" | "moderate" => Some(Climate::Temperate),
            "cool" | "cold" => Some(Climate::Cool),
            _ => None,
        }
    }
}

/// How the weekly drinks are spread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkingPattern {
    #[default]
    Spread,
    Binge,
}

impl DrinkingPattern {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spread" => Some(DrinkingPattern::Spread),
            "binge" => Some(DrinkingPattern::Binge),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietPattern {
    #[default]
    Balanced,
    HighSugar,
}

impl DietPattern {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "balanced" => Some(DietPattern::Balanced),
            "high_sugar" => Some(DietPattern::HighSugar),
            _ => None,
        }
    }
}

/// Height as entered on a form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Height {
    Metric { cm: f64 },
    Imperial { feet: f64, inches: f64 },
}

impl Height {
    /// Height in centimetres; imperial input is rounded to 2 decimals.
    pub fn to_cm(&self) -> f64 {
        match *self {
            Height::Metric { cm } => cm,
            Height::Imperial { feet, inches } => {
                round_to((feet * INCHES_PER_FOOT + inches) * CM_PER_INCH, 2)
            }
        }
    }
}
