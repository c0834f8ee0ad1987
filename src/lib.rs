pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod tables;

pub use error::{CalcError, Result};
pub use models::{ConsumptionLine, NutrientEntry};
