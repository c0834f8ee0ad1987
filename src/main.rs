use std::io::Read;
use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use health_calc_rs::calculator::{
    AlcoholInput, BloodPressureInput, BodyFatInput, BodyProfile, DiabetesInput, HydrationInput,
    ProteinInput, StressInput, SugarInput, calculate_alcohol, calculate_blood_pressure,
    calculate_bmi, calculate_body_fat, calculate_calories_burned, calculate_diabetes,
    calculate_hydration, calculate_ideal_weight, calculate_protein, calculate_sleep,
    calculate_sleep_debt, calculate_stress, calculate_sugar, calculate_tdee, macro_split,
};
use health_calc_rs::cli::{BodyArgs, Cli, Command, TableKind};
use health_calc_rs::error::Result;
use health_calc_rs::interface::{self, handle_protein_json, prompt_consumption};
use health_calc_rs::models::{
    ActivityLevel, CalorieGoal, Climate, ConsumptionLine, DietPattern, DrinkingPattern, Gender,
    HydrationActivity, ProteinGoal,
};
use health_calc_rs::tables::{
    NutrientTable, PROTEIN_TABLE, SUGAR_TABLE, find_calculator, load_table, save_table,
};

const LOG_ENV: &str = "HEALTH_CALC_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "health_calc_rs=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Built-in table unless a file path is configured.
fn load_or_builtin(path: Option<&Path>, builtin: &NutrientTable) -> Result<NutrientTable> {
    match path {
        Some(path) => load_table(path),
        None => Ok(builtin.clone()),
    }
}

/// Print a report as JSON or through its text renderer.
fn emit<T: Serialize>(json: bool, report: &T, render: fn(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        render(report);
    }
    Ok(())
}

fn lines_or_prompt(items: Vec<ConsumptionLine>, table: &NutrientTable) -> Result<Vec<ConsumptionLine>> {
    if items.is_empty() {
        prompt_consumption(table)
    } else {
        Ok(items)
    }
}

fn profile(body: &BodyArgs) -> BodyProfile {
    BodyProfile {
        weight_kg: body.weight,
        height_cm: body.height.to_cm(),
        age: body.age,
        gender: body.gender(),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = cli.json;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::List => {
            interface::display_menu();
            Ok(())
        }
        Command::Describe { route } => {
            let info = find_calculator(&route)?;
            emit(json, info, interface::display_calculator)
        }
        Command::Foods { table, export } => {
            let (table, title) = match table {
                TableKind::Protein => (
                    load_or_builtin(cli.protein_table.as_deref(), &PROTEIN_TABLE)?,
                    "Protein table",
                ),
                TableKind::Sugar => (
                    load_or_builtin(cli.sugar_table.as_deref(), &SUGAR_TABLE)?,
                    "Sugar table",
                ),
            };
            if let Some(path) = export {
                save_table(&path, &table)?;
                eprintln!("Wrote {} entries to {}", table.len(), path.display());
            }
            if json {
                println!("{}", serde_json::to_string_pretty(table.entries())?);
            } else {
                interface::display_table(table.entries(), title);
            }
            Ok(())
        }
        Command::Protein {
            weight,
            goal,
            items,
        } => {
            let table = load_or_builtin(cli.protein_table.as_deref(), &PROTEIN_TABLE)?;
            let input = ProteinInput {
                weight_kg: weight,
                goal: ProteinGoal::from_input(&goal).unwrap_or_default(),
                lines: lines_or_prompt(items, &table)?,
            };
            let report = calculate_protein(&table, &input)?;
            emit(json, &report, interface::display_protein)
        }
        Command::ProteinApi { input } => {
            let table = load_or_builtin(cli.protein_table.as_deref(), &PROTEIN_TABLE)?;
            let body = match input {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            println!("{}", handle_protein_json(&table, &body)?);
            Ok(())
        }
        Command::Sugar { weight, items, .. } => {
            let table = load_or_builtin(cli.sugar_table.as_deref(), &SUGAR_TABLE)?;
            let input = SugarInput {
                weight_kg: weight,
                lines: lines_or_prompt(items, &table)?,
            };
            let report = calculate_sugar(&table, &input)?;
            emit(json, &report, interface::display_sugar)
        }
        Command::Tdee { body, activity } => {
            let activity = ActivityLevel::from_input(&activity).unwrap_or_default();
            let report = calculate_tdee(&profile(&body), activity)?;
            emit(json, &report, interface::display_tdee)
        }
        Command::Macro {
            body,
            activity,
            goal,
        } => {
            let split = macro_split(
                &profile(&body),
                ActivityLevel::from_input(&activity).unwrap_or_default(),
                CalorieGoal::from_input(&goal).unwrap_or_default(),
            )?;
            emit(json, &split, interface::display_macros)
        }
        Command::Water {
            weight,
            activity,
            climate,
            coffee,
            alcohol,
        } => {
            let input = HydrationInput {
                weight_kg: weight,
                activity: HydrationActivity::from_input(&activity).unwrap_or_default(),
                climate: Climate::from_input(&climate).unwrap_or_default(),
                coffee_cups: coffee,
                alcoholic_drinks: alcohol,
            };
            let report = calculate_hydration(&input)?;
            emit(json, &report, interface::display_hydration)
        }
        Command::Bmi { weight, height } => {
            let report = calculate_bmi(weight, height.to_cm())?;
            emit(json, &report, interface::display_bmi)
        }
        Command::Bodyfat {
            body,
            circumferences,
        } => {
            let input = BodyFatInput {
                age: body.age,
                gender: body.gender(),
                weight_kg: body.weight,
                height_cm: body.height.to_cm(),
                circumferences: circumferences.to_cm(body.height.is_imperial()),
            };
            let report = calculate_body_fat(&input)?;
            emit(json, &report, interface::display_body_fat)
        }
        Command::IdealWeight {
            gender,
            height,
            weight,
        } => {
            let gender = Gender::from_input(&gender).unwrap_or_default();
            let report = calculate_ideal_weight(height.to_cm(), gender, weight)?;
            emit(json, &report, interface::display_ideal_weight)
        }
        Command::CaloriesBurned {
            exercise,
            weight,
            duration,
        } => {
            let report = calculate_calories_burned(&exercise, weight, duration)?;
            emit(json, &report, interface::display_calories_burned)
        }
        Command::Sleep { bedtime, wakeup } => {
            let report = calculate_sleep(bedtime.as_deref(), wakeup.as_deref())?;
            emit(json, &report, interface::display_sleep)
        }
        Command::SleepDebt { avg, age, days } => {
            let report = calculate_sleep_debt(avg, age, days)?;
            emit(json, &report, interface::display_sleep_debt)
        }
        Command::Stress {
            work,
            sleep,
            screen,
            exercise,
            meditation,
            social,
        } => {
            let input = StressInput {
                work,
                sleep,
                screen,
                exercise,
                meditation,
                social,
            };
            let report = calculate_stress(&input)?;
            emit(json, &report, interface::display_stress)
        }
        Command::Bp {
            systolic,
            diastolic,
            age,
            history,
        } => {
            let input = BloodPressureInput {
                systolic,
                diastolic,
                age,
                family_history: history,
            };
            let report = calculate_blood_pressure(&input)?;
            emit(json, &report, interface::display_blood_pressure)
        }
        Command::Diabetes {
            fasting,
            postmeal,
            age,
            bmi,
            family,
            activity,
            diet,
        } => {
            let input = DiabetesInput {
                fasting,
                postmeal,
                age,
                bmi,
                family_history: family,
                activity: ActivityLevel::from_input(&activity).unwrap_or_default(),
                diet: DietPattern::from_input(&diet).unwrap_or_default(),
            };
            let report = calculate_diabetes(&input)?;
            emit(json, &report, interface::display_diabetes)
        }
        Command::Alcohol {
            drinks,
            gender,
            weight,
            pattern,
        } => {
            let input = AlcoholInput {
                drinks,
                gender: Gender::from_input(&gender).unwrap_or_default(),
                weight_kg: weight,
                pattern: DrinkingPattern::from_input(&pattern).unwrap_or_default(),
            };
            let report = calculate_alcohol(&input)?;
            emit(json, &report, interface::display_alcohol)
        }
    }
}
