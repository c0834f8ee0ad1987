pub mod aggregate;
pub mod bands;
pub mod body;
pub mod constants;
pub mod energy;
pub mod nutrients;
pub mod risk;
pub mod scale;
pub mod sleep;
pub mod units;

pub use aggregate::aggregate;
pub use bands::{Band, Bands, Bound, Category, GenderedBands};
pub use body::{
    BmiCategory, BmiReport, BodyFatCategory, BodyFatInput, BodyFatReport, Circumferences,
    IdealWeightReport, IdealWeightScale, bmi, calculate_bmi, calculate_body_fat,
    calculate_ideal_weight, deurenberg, ideal_weights, navy,
};
pub use energy::{
    BodyProfile, BurnScale, CaloriesBurnedReport, HydrationInput, HydrationLevel,
    HydrationReport, MacroSplit, TdeeReport, bmr, calculate_calories_burned, calculate_hydration,
    calculate_tdee, calories_burned, macro_split, tdee, water_ml,
};
pub use nutrients::{
    ProteinInput, ProteinReport, SugarInput, SugarReport, SugarStatus, calculate_protein,
    calculate_sugar, protein_target, sugar_daily_calories,
};
pub use risk::{
    AlcoholInput, AlcoholReport, AlcoholRisk, BloodPressureInput, BloodPressureReport, BpCategory,
    DiabetesInput, DiabetesReport, DiabetesRisk, StressInput, StressLevel, StressReport,
    calculate_alcohol, calculate_blood_pressure, calculate_diabetes, calculate_stress,
    diabetes_points, max_severity, stress_score, weekly_drink_limit,
};
pub use scale::{MIN_SCALE_SPAN, Scale, pointer_pct, scale, segments};
pub use sleep::{
    SleepDebtLevel, SleepDebtReport, SleepReport, SleepVerdict, calculate_sleep,
    calculate_sleep_debt, ideal_sleep_hours, parse_clock, sleep_hours,
};
pub use units::{UnitBasis, normalize, round_to};
