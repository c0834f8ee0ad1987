pub mod api;
pub mod prompts;
pub mod render;

pub use api::{ProteinRequest, ProteinResponse, handle_protein_json};
pub use prompts::{exact_match, prompt_consumption, prompt_number, prompt_yes_no, suggest_matches};
pub use render::{
    display_alcohol, display_blood_pressure, display_bmi, display_body_fat, display_calculator,
    display_calories_burned, display_diabetes, display_hydration, display_ideal_weight,
    display_macros, display_menu, display_protein, display_sleep, display_sleep_debt,
    display_stress, display_sugar, display_table, display_tdee, format_segments, gauge,
};
