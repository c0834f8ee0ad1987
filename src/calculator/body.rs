//! Body composition: BMI, body fat and ideal weight.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::calculator::bands::{Band, Bands, Category, GenderedBands};
use crate::calculator::constants::*;
use crate::calculator::scale::{Scale, scale};
use crate::calculator::units::round_to;
use crate::error::{Result, ensure_finite};
use crate::models::Gender;

// ---------------------------------------------------------------------------
// BMI
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category for BmiCategory {
    fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "You may need to gain some weight for health.",
            BmiCategory::Normal => "Good job! Maintain your lifestyle.",
            BmiCategory::Overweight => "Consider balanced diet & exercise.",
            BmiCategory::Obese => "High risk — take action with structured plan.",
        }
    }
}

fn bmi_bands() -> Bands<BmiCategory> {
    Bands::new(
        vec![
            Band::below(HEALTHY_BMI_MIN, BmiCategory::Underweight),
            Band::below(25.0, BmiCategory::Normal),
            Band::below(30.0, BmiCategory::Overweight),
        ],
        BmiCategory::Obese,
    )
}

/// Unrounded BMI; 0 when height is not positive.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    if height_m > 0.0 {
        weight_kg / (height_m * height_m)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: BmiCategory,
    pub advice: String,
    pub scale: Scale,
}

pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<BmiReport> {
    let value = round_to(ensure_finite(bmi(weight_kg, height_cm), "BMI")?, 1);
    // Categorised on the displayed (rounded) value.
    let category = bmi_bands().classify(value);

    Ok(BmiReport {
        bmi: value,
        category,
        advice: category.advice().to_string(),
        scale: scale(
            value,
            BMI_SCALE_MIN,
            BMI_SCALE_MAX,
            &[HEALTHY_BMI_MIN, HEALTHY_BMI_MAX, OVERWEIGHT_BMI_MAX, BMI_SCALE_MAX],
        ),
    })
}

// ---------------------------------------------------------------------------
// Body fat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BodyFatCategory {
    #[serde(rename = "Essential Fat")]
    EssentialFat,
    Athlete,
    Fitness,
    Average,
    Obese,
}

impl Category for BodyFatCategory {
    fn label(&self) -> &'static str {
        match self {
            BodyFatCategory::EssentialFat => "Essential Fat",
            BodyFatCategory::Athlete => "Athlete",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::Obese => "Obese",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            BodyFatCategory::EssentialFat => "Too low, may affect hormones.",
            BodyFatCategory::Athlete => "Excellent shape, maintain performance diet.",
            BodyFatCategory::Fitness => "Very good range for health and looks.",
            BodyFatCategory::Average => "Healthy, but can be improved.",
            BodyFatCategory::Obese => "High risk, reduce fat with diet & exercise.",
        }
    }
}

const MALE_BODY_FAT_EDGES: [f64; 4] = [6.0, 13.0, 17.0, 24.0];
const FEMALE_BODY_FAT_EDGES: [f64; 4] = [14.0, 20.0, 24.0, 31.0];

fn body_fat_bands_for(edges: [f64; 4]) -> Bands<BodyFatCategory> {
    Bands::new(
        vec![
            Band::below(edges[0], BodyFatCategory::EssentialFat),
            Band::at_most(edges[1], BodyFatCategory::Athlete),
            Band::at_most(edges[2], BodyFatCategory::Fitness),
            Band::at_most(edges[3], BodyFatCategory::Average),
        ],
        BodyFatCategory::Obese,
    )
}

fn body_fat_bands() -> GenderedBands<BodyFatCategory> {
    GenderedBands {
        male: body_fat_bands_for(MALE_BODY_FAT_EDGES),
        other: body_fat_bands_for(FEMALE_BODY_FAT_EDGES),
    }
}

/// Circumferences in centimetres; `None` when not measured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Circumferences {
    pub waist_cm: Option<f64>,
    pub neck_cm: Option<f64>,
    pub hip_cm: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
pub struct BodyFatInput {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub circumferences: Circumferences,
}

#[derive(Debug, Clone, Serialize)]
pub struct BodyFatReport {
    pub bf_bmi: f64,
    pub bf_navy: Option<f64>,
    pub bf_final: f64,
    pub category: BodyFatCategory,
    pub advice: String,
    pub fat_mass: f64,
    pub lean_mass: f64,
    pub scale: Scale,
}

/// Deurenberg estimate from BMI, age and sex.
pub fn deurenberg(bmi: f64, age: u32, gender: Gender) -> f64 {
    let sex = if gender.is_male() { 1.0 } else { 0.0 };
    1.20 * bmi + 0.23 * age as f64 - 10.8 * sex - 5.4
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// US Navy estimate, or `None` when a required circumference is missing
/// or a logarithm argument is not positive.
pub fn navy(gender: Gender, height_cm: f64, c: &Circumferences) -> Option<f64> {
    let waist = positive(c.waist_cm)?;
    let neck = positive(c.neck_cm)?;

    let (spread, a, b, h) = if gender.is_male() {
        (waist - neck, 1.0324, 0.19077, 0.15456)
    } else {
        let hip = positive(c.hip_cm)?;
        (waist + hip - neck, 1.29579, 0.35004, 0.22100)
    };
    if spread <= 0.0 || height_cm <= 0.0 {
        return None;
    }

    Some(495.0 / (a - b * spread.log10() + h * height_cm.log10()) - 450.0)
}

pub fn calculate_body_fat(input: &BodyFatInput) -> Result<BodyFatReport> {
    let bmi = bmi(input.weight_kg, input.height_cm);
    let bf_bmi = round_to(deurenberg(bmi, input.age, input.gender), 1);

    let bf_navy =
        navy(input.gender, input.height_cm, &input.circumferences).map(|v| round_to(v, 1));
    if bf_navy.is_none() && input.circumferences.waist_cm.is_some() {
        tracing::debug!(
            gender = input.gender.display_name(),
            "navy estimate unavailable, using BMI-based estimate"
        );
    }

    // A Navy estimate of exactly zero also falls back.
    let bf_final = match bf_navy {
        Some(v) if v != 0.0 => v,
        _ => bf_bmi,
    };
    let bf_final = ensure_finite(bf_final, "body fat")?;

    let category = body_fat_bands().classify(bf_final, input.gender);
    let fat_mass = round_to(input.weight_kg * bf_final / 100.0, 1);
    let lean_mass = round_to(input.weight_kg - fat_mass, 1);

    let edges = if input.gender.is_male() {
        MALE_BODY_FAT_EDGES
    } else {
        FEMALE_BODY_FAT_EDGES
    };
    let mut thresholds = edges.to_vec();
    thresholds.push(BODY_FAT_SCALE_MAX);

    Ok(BodyFatReport {
        bf_bmi,
        bf_navy,
        bf_final,
        category,
        advice: category.advice().to_string(),
        fat_mass,
        lean_mass,
        scale: scale(bf_final, BODY_FAT_SCALE_MIN, BODY_FAT_SCALE_MAX, &thresholds),
    })
}

// ---------------------------------------------------------------------------
// Ideal weight
// ---------------------------------------------------------------------------

/// Base (kg) and slope (kg per inch over five feet) of a classical formula.
struct IdealWeightFormula {
    name: &'static str,
    male: (f64, f64),
    female: (f64, f64),
}

const IDEAL_WEIGHT_FORMULAS: [IdealWeightFormula; 4] = [
    IdealWeightFormula {
        name: "Devine",
        male: (50.0, 2.3),
        female: (45.5, 2.3),
    },
    IdealWeightFormula {
        name: "Hamwi",
        male: (48.0, 2.7),
        female: (45.5, 2.2),
    },
    IdealWeightFormula {
        name: "Miller",
        male: (56.2, 1.41),
        female: (53.1, 1.36),
    },
    IdealWeightFormula {
        name: "Robinson",
        male: (52.0, 1.9),
        female: (49.0, 1.7),
    },
];

/// Classical ideal weights keyed by formula name, rounded to 1 decimal.
pub fn ideal_weights(height_cm: f64, gender: Gender) -> BTreeMap<&'static str, f64> {
    let over = height_cm / CM_PER_INCH - IDEAL_WEIGHT_BASE_INCHES;
    IDEAL_WEIGHT_FORMULAS
        .iter()
        .map(|f| {
            let (base, slope) = if gender.is_male() { f.male } else { f.female };
            (f.name, round_to(base + slope * over, 1))
        })
        .collect()
}

/// Weight at a given BMI for a height.
fn weight_at_bmi(bmi: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    bmi * (height_m * height_m)
}

#[derive(Debug, Clone, Serialize)]
pub struct IdealWeightScale {
    pub min_display_weight: f64,
    pub w_under_end: f64,
    pub w_normal_end: f64,
    pub w_over_end: f64,
    pub max_display_weight: f64,
    pub segments: Vec<f64>,
    pub pointer_pct: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdealWeightReport {
    pub height_cm: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    pub formulas: BTreeMap<&'static str, f64>,
    pub advice: Option<String>,
    pub current_weight: Option<f64>,
    pub scale: IdealWeightScale,
}

pub fn calculate_ideal_weight(
    height_cm: f64,
    gender: Gender,
    current_weight: Option<f64>,
) -> Result<IdealWeightReport> {
    let height_cm = ensure_finite(height_cm, "height")?;
    let min_weight = round_to(weight_at_bmi(HEALTHY_BMI_MIN, height_cm), 1);
    let max_weight = round_to(weight_at_bmi(HEALTHY_BMI_MAX, height_cm), 1);

    let min_display = weight_at_bmi(BMI_SCALE_MIN, height_cm);
    let max_display = weight_at_bmi(BMI_SCALE_MAX, height_cm);
    let thresholds = [
        weight_at_bmi(HEALTHY_BMI_MIN, height_cm),
        weight_at_bmi(HEALTHY_BMI_MAX, height_cm),
        weight_at_bmi(OVERWEIGHT_BMI_MAX, height_cm),
        max_display,
    ];
    let gauge = scale(current_weight.unwrap_or(0.0), min_display, max_display, &thresholds);

    let advice = current_weight.filter(|w| *w != 0.0).map(|w| {
        let range = format!("{:.1}–{:.1} kg", min_weight, max_weight);
        if w < min_weight {
            format!(
                "Your weight {:.1} kg is below the WHO healthy range ({}). Consider gaining weight safely.",
                w, range
            )
        } else if w > max_weight {
            format!(
                "Your weight {:.1} kg is above the WHO healthy range ({}). Consider a structured plan to reduce.",
                w, range
            )
        } else {
            format!(
                "Your weight {:.1} kg is within the WHO healthy range ({}). Maintain with balanced diet and exercise.",
                w, range
            )
        }
    });

    Ok(IdealWeightReport {
        height_cm,
        min_weight,
        max_weight,
        formulas: ideal_weights(height_cm, gender),
        advice,
        current_weight,
        scale: IdealWeightScale {
            min_display_weight: round_to(min_display, 1),
            w_under_end: round_to(thresholds[0], 1),
            w_normal_end: round_to(thresholds[1], 1),
            w_over_end: round_to(thresholds[2], 1),
            max_display_weight: round_to(max_display, 1),
            segments: gauge.segments,
            pointer_pct: current_weight.map(|_| round_to(gauge.pointer_pct, 2)),
        },
    })
}
