use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::calculator::Circumferences;
use crate::calculator::constants::CM_PER_INCH;
use crate::models::{ConsumptionLine, Gender, Height};

/// Health and fitness calculators from the command line.
#[derive(Parser, Debug)]
#[command(name = "health_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Replace the built-in protein table with a JSON or CSV file.
    #[arg(long, global = true, env = "HEALTH_CALC_PROTEIN_TABLE")]
    pub protein_table: Option<PathBuf>,

    /// Replace the built-in sugar table with a JSON or CSV file.
    #[arg(long, global = true, env = "HEALTH_CALC_SUGAR_TABLE")]
    pub sugar_table: Option<PathBuf>,
}

/// Parse a `--item "Name=quantity"` argument. A quantity that is not a
/// number counts as 0.
pub fn parse_item(s: &str) -> Result<ConsumptionLine, String> {
    let (name, qty) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=QUANTITY, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing food name in '{}'", s));
    }
    Ok(ConsumptionLine::new(name, qty.trim().parse().unwrap_or(0.0)))
}

#[derive(Args, Debug, Clone, Default)]
pub struct HeightArgs {
    /// "cm" or "imperial"; imperial reads feet/inches and circumferences in inches.
    #[arg(long, default_value = "cm")]
    pub unit: String,

    #[arg(long, default_value_t = 0.0)]
    pub height_cm: f64,

    #[arg(long, default_value_t = 0.0)]
    pub height_ft: f64,

    #[arg(long, default_value_t = 0.0)]
    pub height_in: f64,
}

impl HeightArgs {
    pub fn is_imperial(&self) -> bool {
        self.unit.trim().eq_ignore_ascii_case("imperial")
    }

    pub fn height(&self) -> Height {
        if self.is_imperial() {
            Height::Imperial {
                feet: self.height_ft,
                inches: self.height_in,
            }
        } else {
            Height::Metric { cm: self.height_cm }
        }
    }

    pub fn to_cm(&self) -> f64 {
        self.height().to_cm()
    }
}

#[derive(Args, Debug, Clone)]
pub struct BodyArgs {
    #[arg(long, default_value_t = 0.0)]
    pub weight: f64,

    #[arg(long, default_value_t = 0)]
    pub age: u32,

    /// "male" or "female"; anything else uses the female coefficients.
    #[arg(long, default_value = "")]
    pub gender: String,

    #[command(flatten)]
    pub height: HeightArgs,
}

impl BodyArgs {
    pub fn gender(&self) -> Gender {
        Gender::from_input(&self.gender).unwrap_or_default()
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct CircumferenceArgs {
    #[arg(long)]
    pub waist: Option<f64>,

    #[arg(long)]
    pub neck: Option<f64>,

    #[arg(long)]
    pub hip: Option<f64>,
}

impl CircumferenceArgs {
    /// Circumferences in centimetres.
    pub fn to_cm(&self, imperial: bool) -> Circumferences {
        let factor = if imperial { CM_PER_INCH } else { 1.0 };
        Circumferences {
            waist_cm: self.waist.map(|v| v * factor),
            neck_cm: self.neck.map(|v| v * factor),
            hip_cm: self.hip.map(|v| v * factor),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Protein,
    Sugar,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// List every calculator by category.
    #[default]
    List,

    /// Show one calculator's menu entry.
    Describe { route: String },

    /// Print a reference food table.
    Foods {
        #[arg(value_enum)]
        table: TableKind,

        /// Also write the table to a JSON or CSV file.
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Daily protein intake against a goal-based target.
    Protein {
        #[arg(long, default_value_t = 0.0)]
        weight: f64,

        /// fat-loss, maintenance or muscle-gain.
        #[arg(long, default_value = "maintenance")]
        goal: String,

        /// Food eaten, as NAME=QUANTITY. Prompts interactively when omitted.
        #[arg(long = "item", value_parser = parse_item)]
        items: Vec<ConsumptionLine>,
    },

    /// Protein calculator over a JSON request (file or stdin).
    ProteinApi {
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Daily sugar intake against WHO limits.
    Sugar {
        #[arg(long, default_value_t = 0.0)]
        weight: f64,

        /// Accepted for form compatibility; does not affect the result.
        #[arg(long)]
        age: Option<u32>,

        /// Accepted for form compatibility; does not affect the result.
        #[arg(long)]
        gender: Option<String>,

        #[arg(long = "item", value_parser = parse_item)]
        items: Vec<ConsumptionLine>,
    },

    /// BMR and total daily energy expenditure.
    Tdee {
        #[command(flatten)]
        body: BodyArgs,

        #[arg(long, default_value = "sedentary")]
        activity: String,
    },

    /// Calories and macronutrient split for a goal.
    Macro {
        #[command(flatten)]
        body: BodyArgs,

        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// cut, maintain or bulk.
        #[arg(long, default_value = "maintain")]
        goal: String,
    },

    /// Daily water intake.
    Water {
        #[arg(long, default_value_t = 0.0)]
        weight: f64,

        /// low, moderate or high.
        #[arg(long, default_value = "moderate")]
        activity: String,

        /// hot, temperate or cool.
        #[arg(long, default_value = "temperate")]
        climate: String,

        #[arg(long, default_value_t = 0)]
        coffee: u32,

        #[arg(long, default_value_t = 0)]
        alcohol: u32,
    },

    /// Body mass index.
    Bmi {
        #[arg(long, default_value_t = 0.0)]
        weight: f64,

        #[command(flatten)]
        height: HeightArgs,
    },

    /// Body fat percentage (Navy method when circumferences are given).
    Bodyfat {
        #[command(flatten)]
        body: BodyArgs,

        #[command(flatten)]
        circumferences: CircumferenceArgs,
    },

    /// WHO healthy range and classical ideal weight formulas.
    IdealWeight {
        #[arg(long, default_value = "")]
        gender: String,

        #[command(flatten)]
        height: HeightArgs,

        /// Current weight, for advice and the gauge pointer.
        #[arg(long)]
        weight: Option<f64>,
    },

    /// Calories burned by an exercise.
    CaloriesBurned {
        #[arg(long, default_value = "")]
        exercise: String,

        #[arg(long, default_value_t = 0.0)]
        weight: f64,

        /// Minutes.
        #[arg(long, default_value_t = 0.0)]
        duration: f64,
    },

    /// Sleep-cycle timing from a bedtime, a wake-up time, or both (HH:MM).
    Sleep {
        #[arg(long)]
        bedtime: Option<String>,

        #[arg(long)]
        wakeup: Option<String>,
    },

    /// Accumulated sleep debt.
    SleepDebt {
        /// Average hours slept per night.
        #[arg(long, default_value_t = 0.0)]
        avg: f64,

        #[arg(long, default_value_t = 0)]
        age: u32,

        #[arg(long, default_value_t = crate::calculator::constants::DEFAULT_DEBT_DAYS)]
        days: u32,
    },

    /// Stress balance score from daily hours.
    Stress {
        #[arg(long, default_value_t = 0)]
        work: i32,
        #[arg(long, default_value_t = 0)]
        sleep: i32,
        #[arg(long, default_value_t = 0)]
        screen: i32,
        #[arg(long, default_value_t = 0)]
        exercise: i32,
        #[arg(long, default_value_t = 0)]
        meditation: i32,
        #[arg(long, default_value_t = 0)]
        social: i32,
    },

    /// Blood pressure category.
    Bp {
        #[arg(long, default_value_t = 0)]
        systolic: i32,

        #[arg(long, default_value_t = 0)]
        diastolic: i32,

        #[arg(long)]
        age: Option<u32>,

        /// Family history of high blood pressure.
        #[arg(long)]
        history: bool,
    },

    /// Diabetes risk score with lifestyle tips.
    Diabetes {
        #[arg(long, default_value_t = 0.0)]
        fasting: f64,

        #[arg(long, default_value_t = 0.0)]
        postmeal: f64,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        bmi: Option<f64>,

        /// Family history of diabetes.
        #[arg(long)]
        family: bool,

        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// balanced or high_sugar.
        #[arg(long, default_value = "balanced")]
        diet: String,
    },

    /// Weekly alcohol intake risk.
    Alcohol {
        #[arg(long, default_value_t = 0)]
        drinks: u32,

        #[arg(long, default_value = "male")]
        gender: String,

        #[arg(long)]
        weight: Option<f64>,

        /// spread or binge.
        #[arg(long, default_value = "spread")]
        pattern: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let line = parse_item("Chicken Breast=150").unwrap();
        assert_eq!(line.food_name, "Chicken Breast");
        assert_eq!(line.quantity, 150.0);

        assert_eq!(parse_item("Egg=lots").unwrap().quantity, 0.0);
        assert!(parse_item("Egg").is_err());
        assert!(parse_item("=3").is_err());
    }

    #[test]
    fn test_imperial_height_and_circumferences() {
        let height = HeightArgs {
            unit: "imperial".to_string(),
            height_ft: 5.0,
            height_in: 9.0,
            ..Default::default()
        };
        assert_eq!(height.to_cm(), 175.26);

        let c = CircumferenceArgs {
            waist: Some(10.0),
            neck: None,
            hip: None,
        }
        .to_cm(true);
        assert!((c.waist_cm.unwrap() - 25.4).abs() < 1e-9);
        assert_eq!(c.neck_cm, None);
    }

    #[test]
    fn test_cli_parses_subcommand_with_items() {
        let cli = Cli::try_parse_from([
            "health_calc",
            "--json",
            "protein",
            "--weight",
            "70",
            "--item",
            "Egg=2",
            "--item",
            "Paneer=100",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Command::Protein { weight, items, .. }) => {
                assert_eq!(weight, 70.0);
                assert_eq!(items.len(), 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_list() {
        let cli = Cli::try_parse_from(["health_calc"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::List));
    }

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
