//! Lifestyle and clinical risk scoring: stress, blood pressure, diabetes and
//! alcohol.

use serde::Serialize;

use crate::calculator::bands::{Band, Bands, Category};
use crate::calculator::constants::*;
use crate::calculator::units::round_to;
use crate::error::Result;
use crate::models::{ActivityLevel, DietPattern, DrinkingPattern, Gender};

// ---------------------------------------------------------------------------
// Stress
// ---------------------------------------------------------------------------

/// Daily hours feeding the stress balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct StressInput {
    pub work: i32,
    pub sleep: i32,
    pub screen: i32,
    pub exercise: i32,
    pub meditation: i32,
    pub social: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StressLevel {
    High,
    Manageable,
    Balanced,
}

impl Category for StressLevel {
    fn label(&self) -> &'static str {
        match self {
            StressLevel::High => "High Stress",
            StressLevel::Manageable => "Manageable",
            StressLevel::Balanced => "Great balance",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            StressLevel::High => "High Stress 🔴 — consider lifestyle adjustments.",
            StressLevel::Manageable => "Manageable 🟡 — focus on better relaxation.",
            StressLevel::Balanced => "Great balance 🟢 — keep up your routine!",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StressReport {
    pub score: i32,
    pub stress_total: i32,
    pub relax_total: i32,
    pub level: StressLevel,
    pub advice: String,
}

/// Balance score in [0, 100]; higher is better.
pub fn stress_score(input: &StressInput) -> (i32, i32, i32) {
    let stress_total = input
        .work
        .saturating_add(input.screen)
        .saturating_add(FULL_NIGHT_SLEEP_HOURS.saturating_sub(input.sleep));
    let relax_total = input
        .exercise
        .saturating_add(input.meditation)
        .saturating_add(input.social);
    let score = 100_i32
        .saturating_sub(stress_total.saturating_mul(STRESS_LOAD_WEIGHT))
        .saturating_add(relax_total.saturating_mul(RELAX_WEIGHT))
        .clamp(0, 100);
    (score, stress_total, relax_total)
}

pub fn calculate_stress(input: &StressInput) -> Result<StressReport> {
    let (score, stress_total, relax_total) = stress_score(input);
    let level = Bands::new(
        vec![
            Band::below(60.0, StressLevel::High),
            Band::below(80.0, StressLevel::Manageable),
        ],
        StressLevel::Balanced,
    )
    .classify(score as f64);

    Ok(StressReport {
        score,
        stress_total,
        relax_total,
        level,
        advice: level.advice().to_string(),
    })
}

// ---------------------------------------------------------------------------
// Blood pressure
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BpCategory {
    #[serde(rename = "Hypertensive Crisis")]
    Crisis,
    #[serde(rename = "High BP Stage 2")]
    Stage2,
    #[serde(rename = "High BP Stage 1")]
    Stage1,
    Elevated,
    Normal,
    Hypotension,
}

impl BpCategory {
    /// Lower is more severe. Hypotension ranks below Normal.
    pub fn severity_rank(&self) -> u8 {
        match self {
            BpCategory::Crisis => 0,
            BpCategory::Stage2 => 1,
            BpCategory::Stage1 => 2,
            BpCategory::Elevated => 3,
            BpCategory::Normal => 4,
            BpCategory::Hypotension => 5,
        }
    }
}

/// The more severe of two categories.
pub fn max_severity(a: BpCategory, b: BpCategory) -> BpCategory {
    if b.severity_rank() < a.severity_rank() { b } else { a }
}

impl Category for BpCategory {
    fn label(&self) -> &'static str {
        match self {
            BpCategory::Crisis => "Hypertensive Crisis",
            BpCategory::Stage2 => "High BP Stage 2",
            BpCategory::Stage1 => "High BP Stage 1",
            BpCategory::Elevated => "Elevated",
            BpCategory::Normal => "Normal",
            BpCategory::Hypotension => "Hypotension",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            BpCategory::Crisis => "Hypertensive crisis — seek immediate medical attention!",
            BpCategory::Stage2 => "High BP Stage 2 — consult a doctor; risk of complications.",
            BpCategory::Stage1 => {
                "High BP Stage 1 — monitor regularly & adopt a low-salt, active lifestyle."
            }
            BpCategory::Elevated => {
                "Elevated BP — lifestyle improvements (diet, exercise) recommended."
            }
            BpCategory::Normal => "Normal — maintain healthy habits.",
            BpCategory::Hypotension => {
                "Low BP detected — if symptomatic (dizziness, fainting), consult a doctor."
            }
        }
    }
}

fn systolic_bands() -> Bands<BpCategory> {
    Bands::new(
        vec![
            Band::below(90.0, BpCategory::Hypotension),
            Band::below(120.0, BpCategory::Normal),
            Band::below(130.0, BpCategory::Elevated),
            Band::below(140.0, BpCategory::Stage1),
            Band::below(180.0, BpCategory::Stage2),
        ],
        BpCategory::Crisis,
    )
}

fn diastolic_bands() -> Bands<BpCategory> {
    Bands::new(
        vec![
            Band::below(60.0, BpCategory::Hypotension),
            Band::below(80.0, BpCategory::Normal),
            Band::below(90.0, BpCategory::Stage1),
            Band::below(120.0, BpCategory::Stage2),
        ],
        BpCategory::Crisis,
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BloodPressureInput {
    pub systolic: i32,
    pub diastolic: i32,
    pub age: Option<u32>,
    pub family_history: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BloodPressureReport {
    pub systolic: i32,
    pub diastolic: i32,
    pub sys_cat: BpCategory,
    pub dia_cat: BpCategory,
    pub category: BpCategory,
    pub advice: String,
}

pub fn calculate_blood_pressure(input: &BloodPressureInput) -> Result<BloodPressureReport> {
    let sys_cat = systolic_bands().classify(input.systolic as f64);
    let dia_cat = diastolic_bands().classify(input.diastolic as f64);
    let category = max_severity(sys_cat, dia_cat);

    let mut advice = category.advice().to_string();
    if input.age.is_some_and(|age| age > SCREENING_AGE) {
        advice.push_str(" (Over 50 — regular checkups recommended.)");
    }
    if input.family_history {
        advice.push_str(" Family history increases risk — stay proactive.");
    }

    Ok(BloodPressureReport {
        systolic: input.systolic,
        diastolic: input.diastolic,
        sys_cat,
        dia_cat,
        category,
        advice,
    })
}

// ---------------------------------------------------------------------------
// Diabetes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiabetesRisk {
    Normal,
    #[serde(rename = "Prediabetes Risk")]
    Prediabetes,
    #[serde(rename = "High Risk (Possible Diabetes)")]
    High,
}

impl Category for DiabetesRisk {
    fn label(&self) -> &'static str {
        match self {
            DiabetesRisk::Normal => "Normal",
            DiabetesRisk::Prediabetes => "Prediabetes Risk",
            DiabetesRisk::High => "High Risk (Possible Diabetes)",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            DiabetesRisk::Normal => "Normal range — maintain healthy habits.",
            DiabetesRisk::Prediabetes => {
                "Prediabetes risk — improve diet, increase activity, and monitor regularly."
            }
            DiabetesRisk::High => {
                "High diabetes risk — consult a doctor for blood tests and adopt strict lifestyle changes."
            }
        }
    }
}

impl DiabetesRisk {
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            DiabetesRisk::Normal => &[
                "Continue balanced meals with fruits & veggies.",
                "Exercise at least 3–4 times a week.",
                "Limit fried/junk food to occasional treats.",
                "Get annual blood sugar screening.",
                "Stay hydrated and stress-free.",
            ],
            DiabetesRisk::Prediabetes => &[
                "Reduce portion sizes and refined carbs.",
                "Include 20–30 min of brisk walking most days.",
                "Cut down on late-night snacking.",
                "Track weight and waist circumference.",
                "Increase water intake and avoid excess alcohol.",
            ],
            DiabetesRisk::High => &[
                "Adopt a low-carb, high-fiber diet (vegetables, legumes, whole grains).",
                "Avoid sugary drinks and processed foods.",
                "Exercise at least 30 minutes daily (walking, jogging, yoga).",
                "Get regular HbA1c and blood sugar tests.",
                "Maintain a healthy sleep schedule (7–8 hrs).",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiabetesInput {
    pub fasting: f64,
    pub postmeal: f64,
    pub age: Option<u32>,
    pub bmi: Option<f64>,
    pub family_history: bool,
    pub activity: ActivityLevel,
    pub diet: DietPattern,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiabetesReport {
    pub fasting: f64,
    pub postmeal: f64,
    pub age: Option<u32>,
    pub bmi: Option<f64>,
    pub score: u32,
    pub category: DiabetesRisk,
    pub advice: String,
    pub tips: Vec<String>,
}

/// Additive risk points.
pub fn diabetes_points(input: &DiabetesInput) -> u32 {
    let mut score = 0;

    score += match input.fasting {
        f if f >= 126.0 => 40,
        f if f >= 100.0 => 20,
        _ => 0,
    };
    score += match input.postmeal {
        p if p >= 200.0 => 40,
        p if p >= 140.0 => 20,
        _ => 0,
    };

    if input.age.is_some_and(|age| age >= 45) {
        score += 10;
    }
    if input.bmi.is_some_and(|bmi| bmi >= 25.0) {
        score += 10;
    }
    if input.family_history {
        score += 10;
    }
    if input.activity == ActivityLevel::Sedentary {
        score += 10;
    }
    if input.diet == DietPattern::HighSugar {
        score += 10;
    }
    score
}

pub fn calculate_diabetes(input: &DiabetesInput) -> Result<DiabetesReport> {
    let score = diabetes_points(input);
    let category = Bands::new(
        vec![
            Band::below(40.0, DiabetesRisk::Normal),
            Band::below(70.0, DiabetesRisk::Prediabetes),
        ],
        DiabetesRisk::High,
    )
    .classify(score as f64);

    let mut advice = category.advice().to_string();
    if input.age.is_some_and(|age| age > SCREENING_AGE) {
        advice.push_str(" (Age above 50: regular annual screening recommended.)");
    }

    Ok(DiabetesReport {
        fasting: input.fasting,
        postmeal: input.postmeal,
        age: input.age,
        bmi: input.bmi,
        score,
        category,
        advice,
        tips: category.tips().iter().map(|t| t.to_string()).collect(),
    })
}

// ---------------------------------------------------------------------------
// Alcohol
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlcoholRisk {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl Category for AlcoholRisk {
    fn label(&self) -> &'static str {
        match self {
            AlcoholRisk::Low => "Low Risk",
            AlcoholRisk::Moderate => "Moderate Risk",
            AlcoholRisk::High => "High Risk",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            AlcoholRisk::Low => "Within safe limits — maintain moderation.",
            AlcoholRisk::Moderate => "Above recommended weekly limit — cut back gradually.",
            AlcoholRisk::High => {
                "High alcohol intake — risk of liver, heart & sleep issues. Strongly advised to reduce."
            }
        }
    }
}

impl AlcoholRisk {
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            AlcoholRisk::Low => &[
                "Keep alcohol-free days during the week.",
                "Stay hydrated and avoid drinking on an empty stomach.",
                "Continue moderate, social drinking only.",
            ],
            AlcoholRisk::Moderate => &[
                "Replace alcohol with non-alcoholic alternatives sometimes.",
                "Avoid binge drinking — spread consumption over the week.",
                "Include liver-friendly foods (leafy greens, fruits, nuts).",
            ],
            AlcoholRisk::High => &[
                "Seek medical advice if finding it difficult to cut down.",
                "Join support groups or track consumption with an app.",
                "Avoid alcohol before sleep — improves rest & recovery.",
                "Focus on exercise, hydration, and balanced diet.",
            ],
        }
    }
}

const BINGE_ADVICE: &str = "Your weekly intake is within safe limits, but binge drinking is harmful. Spread drinks across the week.";
const BINGE_TIP: &str = "Avoid binge sessions — spread your drinks across multiple days.";

#[derive(Debug, Clone, Copy, Default)]
pub struct AlcoholInput {
    pub drinks: u32,
    pub gender: Gender,
    pub weight_kg: Option<f64>,
    pub pattern: DrinkingPattern,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlcoholReport {
    pub drinks: u32,
    pub gender: String,
    pub weight: Option<f64>,
    pub pattern: DrinkingPattern,
    pub category: AlcoholRisk,
    pub advice: String,
    pub tips: Vec<String>,
    pub score: u32,
    pub safe_limit: u32,
    pub ethanol: u32,
    pub safe_ethanol: u32,
    pub compare_pct: u32,
}

/// Weekly standard-drink limit.
pub fn weekly_drink_limit(gender: Gender) -> u32 {
    if gender.is_male() {
        MALE_WEEKLY_DRINK_LIMIT
    } else {
        FEMALE_WEEKLY_DRINK_LIMIT
    }
}

pub fn calculate_alcohol(input: &AlcoholInput) -> Result<AlcoholReport> {
    let safe_limit = weekly_drink_limit(input.gender);
    let ethanol = input.drinks.saturating_mul(ETHANOL_G_PER_DRINK);
    let safe_ethanol = safe_limit * ETHANOL_G_PER_DRINK;

    let score = if input.drinks == 0 {
        0
    } else {
        round_to(input.drinks as f64 / (safe_limit * 2) as f64 * 100.0, 0).min(100.0) as u32
    };
    let compare_pct = if safe_ethanol > 0 {
        round_to(ethanol as f64 / safe_ethanol as f64 * 100.0, 0).min(ALCOHOL_COMPARE_CAP) as u32
    } else {
        0
    };

    let category = Bands::new(
        vec![
            Band::at_most(safe_limit as f64, AlcoholRisk::Low),
            Band::at_most((safe_limit * 2) as f64, AlcoholRisk::Moderate),
        ],
        AlcoholRisk::High,
    )
    .classify(input.drinks as f64);

    let mut advice = category.advice().to_string();
    let mut tips: Vec<String> = category.tips().iter().map(|t| t.to_string()).collect();
    // Bingeing overrides the advice only while the weekly total is low.
    if input.pattern == DrinkingPattern::Binge && category == AlcoholRisk::Low {
        advice = BINGE_ADVICE.to_string();
        tips.insert(0, BINGE_TIP.to_string());
    }

    Ok(AlcoholReport {
        drinks: input.drinks,
        gender: input.gender.display_name().to_string(),
        weight: input.weight_kg,
        pattern: input.pattern,
        category,
        advice,
        tips,
        score,
        safe_limit,
        ethanol,
        safe_ethanol,
        compare_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_score_clamped() {
        let relaxed = StressInput {
            sleep: 8,
            exercise: 2,
            meditation: 1,
            social: 2,
            ..Default::default()
        };
        let report = calculate_stress(&relaxed).unwrap();
        // 100 - 2*5 + 5*3
        assert_eq!(report.score, 100);
        assert_eq!(report.level, StressLevel::Balanced);

        let busy = StressInput {
            work: 12,
            sleep: 5,
            screen: 6,
            ..Default::default()
        };
        let report = calculate_stress(&busy).unwrap();
        assert_eq!(report.stress_total, 23);
        assert_eq!(report.score, 0);
        assert_eq!(report.level, StressLevel::High);
    }

    #[test]
    fn test_stress_manageable_band() {
        let input = StressInput {
            work: 8,
            sleep: 7,
            screen: 2,
            exercise: 1,
            meditation: 0,
            social: 1,
        };
        // 100 - 13*5 + 2*3 = 41
        assert_eq!(calculate_stress(&input).unwrap().level, StressLevel::High);
        let input = StressInput {
            work: 4,
            sleep: 8,
            screen: 2,
            ..Default::default()
        };
        // 100 - 8*5 = 60
        assert_eq!(
            calculate_stress(&input).unwrap().level,
            StressLevel::Manageable
        );
    }

    #[test]
    fn test_bp_worst_of_two() {
        let report = calculate_blood_pressure(&BloodPressureInput {
            systolic: 185,
            diastolic: 70,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(report.sys_cat, BpCategory::Crisis);
        assert_eq!(report.dia_cat, BpCategory::Normal);
        assert_eq!(report.category, BpCategory::Crisis);
    }

    #[test]
    fn test_bp_hypotension_ranks_least_severe() {
        assert_eq!(
            max_severity(BpCategory::Hypotension, BpCategory::Normal),
            BpCategory::Normal
        );
        let report = calculate_blood_pressure(&BloodPressureInput {
            systolic: 85,
            diastolic: 55,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(report.category, BpCategory::Hypotension);
    }

    #[test]
    fn test_bp_advice_suffixes() {
        let report = calculate_blood_pressure(&BloodPressureInput {
            systolic: 125,
            diastolic: 75,
            age: Some(55),
            family_history: true,
        })
        .unwrap();
        assert_eq!(report.category, BpCategory::Elevated);
        assert!(report.advice.contains("Over 50"));
        assert!(report.advice.ends_with("stay proactive."));

        let report = calculate_blood_pressure(&BloodPressureInput {
            systolic: 110,
            diastolic: 70,
            age: Some(50),
            family_history: false,
        })
        .unwrap();
        assert_eq!(report.advice, "Normal — maintain healthy habits.");
    }

    #[test]
    fn test_diabetes_scoring() {
        let input = DiabetesInput {
            fasting: 110.0,
            postmeal: 150.0,
            age: Some(50),
            bmi: Some(27.0),
            family_history: false,
            activity: ActivityLevel::Moderate,
            diet: DietPattern::Balanced,
        };
        assert_eq!(diabetes_points(&input), 60);
        let report = calculate_diabetes(&input).unwrap();
        assert_eq!(report.category, DiabetesRisk::Prediabetes);
        assert_eq!(report.tips.len(), 5);
        assert!(!report.advice.contains("Age above 50"));
    }

    #[test]
    fn test_diabetes_high_risk() {
        let input = DiabetesInput {
            fasting: 130.0,
            postmeal: 210.0,
            age: Some(60),
            ..Default::default()
        };
        // 40 + 40 + 10 + 10 (sedentary default)
        let report = calculate_diabetes(&input).unwrap();
        assert_eq!(report.score, 100);
        assert_eq!(report.category, DiabetesRisk::High);
        assert!(report.advice.ends_with("(Age above 50: regular annual screening recommended.)"));
    }

    #[test]
    fn test_alcohol_categories() {
        let run = |drinks, pattern| {
            calculate_alcohol(&AlcoholInput {
                drinks,
                gender: Gender::Male,
                weight_kg: None,
                pattern,
            })
            .unwrap()
        };

        let moderate = run(20, DrinkingPattern::Spread);
        assert_eq!(moderate.category, AlcoholRisk::Moderate);
        assert_eq!(moderate.score, 71);
        assert_eq!(moderate.compare_pct, 143);

        let binge = run(10, DrinkingPattern::Binge);
        assert_eq!(binge.category, AlcoholRisk::Low);
        assert_eq!(binge.advice, BINGE_ADVICE);
        assert_eq!(binge.tips[0], BINGE_TIP);
        assert_eq!(binge.tips.len(), 4);

        let heavy = run(40, DrinkingPattern::Binge);
        assert_eq!(heavy.category, AlcoholRisk::High);
        assert_eq!(heavy.score, 100);
        assert_eq!(heavy.compare_pct, 200);
        assert_eq!(heavy.tips.len(), 4);
    }

    #[test]
    fn test_alcohol_female_limit_and_zero_drinks() {
        let report = calculate_alcohol(&AlcoholInput {
            drinks: 0,
            gender: Gender::Female,
            weight_kg: Some(60.0),
            pattern: DrinkingPattern::Spread,
        })
        .unwrap();
        assert_eq!(report.safe_limit, 7);
        assert_eq!(report.safe_ethanol, 98);
        assert_eq!(report.score, 0);
        assert_eq!(report.category, AlcoholRisk::Low);
    }

    #[test]
    fn test_extreme_inputs_saturate() {
        let overworked = StressInput {
            work: i32::MAX,
            sleep: i32::MIN,
            screen: i32::MAX,
            ..Default::default()
        };
        let report = calculate_stress(&overworked).unwrap();
        assert_eq!(report.stress_total, i32::MAX);
        assert_eq!(report.score, 0);
        assert_eq!(report.level, StressLevel::High);

        let relaxed = StressInput {
            sleep: 8,
            exercise: i32::MAX,
            meditation: i32::MAX,
            ..Default::default()
        };
        assert_eq!(calculate_stress(&relaxed).unwrap().score, 100);

        let report = calculate_alcohol(&AlcoholInput {
            drinks: u32::MAX,
            gender: Gender::Male,
            weight_kg: None,
            pattern: DrinkingPattern::Spread,
        })
        .unwrap();
        assert_eq!(report.ethanol, u32::MAX);
        assert_eq!(report.score, 100);
        assert_eq!(report.category, AlcoholRisk::High);
    }
}
