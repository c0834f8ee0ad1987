pub mod food;
pub mod profile;

pub use food::{
    AggregateResult, ConsumptionLine, NutrientBreakdownItem, NutrientEntry, TargetStatus,
};
pub use profile::{
    ActivityLevel, CalorieGoal, Climate, DietPattern, DrinkingPattern, Gender, Height,
    HydrationActivity, ProteinGoal,
};
