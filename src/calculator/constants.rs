// ─────────────────────────────────────────────────────────────────────────────
// Energy
// ─────────────────────────────────────────────────────────────────────────────

/// Mifflin-St Jeor coefficients.
pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_CONSTANT: f64 = 5.0;
pub const BMR_FEMALE_CONSTANT: f64 = -161.0;

/// Share of calories per macronutrient (protein / carbs / fat).
pub const MACRO_PROTEIN_SHARE: f64 = 0.25;
pub const MACRO_CARBS_SHARE: f64 = 0.50;
pub const MACRO_FAT_SHARE: f64 = 0.25;

/// Energy density in kcal per gram.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// MET used when the activity is not in the table.
pub const DEFAULT_MET: f64 = 6.0;

/// Calorie burn gauge: 0 to 1000 kcal.
pub const BURN_SCALE_MAX: f64 = 1000.0;
pub const BURN_MILESTONES: [f64; 3] = [200.0, 500.0, 1000.0];

/// Reference foods for the "that's worth N of these" comparison.
pub const PIZZA_SLICE_KCAL: f64 = 285.0;
pub const CHOCOLATE_BAR_KCAL: f64 = 250.0;
pub const BEER_KCAL: f64 = 150.0;

// ─────────────────────────────────────────────────────────────────────────────
// Hydration
// ─────────────────────────────────────────────────────────────────────────────

pub const HOT_CLIMATE_ML: f64 = 500.0;
pub const COOL_CLIMATE_ML: f64 = -250.0;
pub const ML_PER_COFFEE: f64 = 100.0;
pub const ML_PER_ALCOHOLIC_DRINK: f64 = 150.0;

/// Fraction of the daily target per slot.
pub const HYDRATION_SCHEDULE: [(&str, f64); 4] = [
    ("Morning", 0.25),
    ("Midday", 0.35),
    ("Evening", 0.25),
    ("Workout", 0.15),
];

// ─────────────────────────────────────────────────────────────────────────────
// Nutrients
// ─────────────────────────────────────────────────────────────────────────────

/// Calories per kg of body weight used to estimate the sugar allowance.
pub const SUGAR_KCAL_PER_KG: f64 = 30.0;

/// Floor on the estimated daily calories for the sugar allowance.
pub const SUGAR_MIN_DAILY_KCAL: f64 = 1500.0;

/// WHO free-sugar limits as a share of daily calories.
pub const SUGAR_IDEAL_SHARE: f64 = 0.05;
pub const SUGAR_UPPER_SHARE: f64 = 0.10;

pub const KCAL_PER_G_SUGAR: f64 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// Body composition
// ─────────────────────────────────────────────────────────────────────────────

pub const CM_PER_INCH: f64 = 2.54;
pub const INCHES_PER_FOOT: f64 = 12.0;

/// WHO healthy BMI range.
pub const HEALTHY_BMI_MIN: f64 = 18.5;
pub const HEALTHY_BMI_MAX: f64 = 24.9;
pub const OVERWEIGHT_BMI_MAX: f64 = 29.9;

/// BMI gauge range, also used as the display range of the ideal-weight bar.
pub const BMI_SCALE_MIN: f64 = 15.0;
pub const BMI_SCALE_MAX: f64 = 40.0;

/// Body fat gauge range (%).
pub const BODY_FAT_SCALE_MIN: f64 = 5.0;
pub const BODY_FAT_SCALE_MAX: f64 = 50.0;

/// Height (inches) the classical ideal-weight formulas are anchored at.
pub const IDEAL_WEIGHT_BASE_INCHES: f64 = 60.0;

// ─────────────────────────────────────────────────────────────────────────────
// Sleep
// ─────────────────────────────────────────────────────────────────────────────

pub const SLEEP_CYCLE_MINUTES: i64 = 90;
pub const FALL_ASLEEP_MINUTES: i64 = 15;
pub const MIN_SUGGESTED_CYCLES: i64 = 3;
pub const MAX_SUGGESTED_CYCLES: i64 = 6;

/// Sleep duration gauge (hours).
pub const SLEEP_SCALE_MIN_HOURS: f64 = 4.0;
pub const SLEEP_SCALE_MAX_HOURS: f64 = 12.0;
pub const SLEEP_TARGET_HOURS: f64 = 8.0;

pub const DEFAULT_DEBT_DAYS: u32 = 7;
pub const SLEEP_DEBT_SCALE_MAX: f64 = 28.0;
pub const SLEEP_DEBT_THRESHOLDS: [f64; 3] = [5.0, 14.0, 21.0];

// ─────────────────────────────────────────────────────────────────────────────
// Risk scores
// ─────────────────────────────────────────────────────────────────────────────

/// Age above which screening notes are appended to advice.
pub const SCREENING_AGE: u32 = 50;

/// Stress score weights.
pub const STRESS_LOAD_WEIGHT: i32 = 5;
pub const RELAX_WEIGHT: i32 = 3;
pub const FULL_NIGHT_SLEEP_HOURS: i32 = 10;

/// Standard drinks per week considered low risk.
pub const MALE_WEEKLY_DRINK_LIMIT: u32 = 14;
pub const FEMALE_WEEKLY_DRINK_LIMIT: u32 = 7;
pub const ETHANOL_G_PER_DRINK: u32 = 14;
pub const ALCOHOL_COMPARE_CAP: f64 = 200.0;
