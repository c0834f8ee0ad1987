mod builtin;
pub mod menu;
mod persistence;
mod table;

pub use builtin::{MET_TABLE, PROTEIN_TABLE, SUGAR_TABLE, met_for};
pub use menu::{CALCULATORS, CalculatorInfo, categories, find_calculator, in_category};
pub use persistence::{load_table, save_table};
pub use table::NutrientTable;
