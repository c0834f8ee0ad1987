use crate::calculator::{
    AlcoholReport, BloodPressureReport, BmiReport, BodyFatReport, CaloriesBurnedReport,
    Category, DiabetesReport, HydrationReport, IdealWeightReport, MacroSplit, ProteinReport,
    Scale, SleepDebtReport, SleepReport, StressReport, SugarReport, TdeeReport, round_to,
};
use crate::models::{NutrientBreakdownItem, NutrientEntry};
use crate::tables::{CalculatorInfo, categories, in_category};

const GAUGE_WIDTH: usize = 40;

/// Segment widths as percentages with 2 decimals.
pub fn format_segments(segments: &[f64]) -> String {
    segments
        .iter()
        .map(|s| format!("{:.2}%", round_to(*s, 2)))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Text gauge with a pointer at `pointer_pct` (0..=100).
pub fn gauge(pointer_pct: f64) -> String {
    let pos = ((pointer_pct.clamp(0.0, 100.0) / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    let mut bar: Vec<char> = vec!['-'; GAUGE_WIDTH + 1];
    bar[pos.min(GAUGE_WIDTH)] = '▲';
    format!("[{}] {:.2}%", bar.into_iter().collect::<String>(), pointer_pct)
}

fn display_scale(scale: &Scale) {
    println!(
        "Scale {}..{}  thresholds {:?}",
        scale.min_value, scale.max_value, scale.thresholds
    );
    println!("  segments: {}", format_segments(&scale.segments));
    println!("  {}", gauge(round_to(scale.pointer_pct, 2)));
}

fn display_breakdown(breakdown: &[NutrientBreakdownItem], nutrient: &str) {
    if breakdown.is_empty() {
        println!("  (no recognised foods)");
        return;
    }

    let width = breakdown.iter().map(|b| b.food_name.len()).max().unwrap_or(10);
    for item in breakdown {
        println!(
            "  {:<width$}  x {:>7}  {:>8.2} g {}  ({})",
            item.food_name,
            item.quantity,
            item.amount,
            nutrient,
            item.unit,
            width = width
        );
    }
}

fn display_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}:", title);
    for item in items {
        println!("  - {}", item);
    }
}

/// Print the calculator menu grouped by category.
pub fn display_menu() {
    println!();
    for category in categories() {
        println!("=== {} ===", category);
        for calc in in_category(category) {
            println!("  {} {:<22} {:<16} {}", calc.icon, calc.name, calc.route, calc.desc);
        }
        println!();
    }
}

pub fn display_calculator(info: &CalculatorInfo) {
    println!("{} {}", info.icon, info.name);
    println!("  route:    {}", info.route);
    println!("  category: {}", info.category);
    println!("  {}", info.desc);
}

/// Print reference table rows in declaration order.
pub fn display_table(entries: &[NutrientEntry], title: &str) {
    if entries.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, entries.len());
    println!();

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(10);
    for entry in entries {
        println!(
            "  {:<width$}  {:>6} g  {}",
            entry.name,
            entry.amount,
            entry.unit,
            width = width
        );
    }
    println!();
}

pub fn display_protein(report: &ProteinReport) {
    println!();
    println!("=== Protein Intake ===");
    display_breakdown(&report.breakdown, "protein");
    println!();
    println!(
        "Total: {:.2} g  Target: {:.1} g  Status: {}",
        report.total_protein,
        report.target,
        report.status.label()
    );
}

pub fn display_sugar(report: &SugarReport) {
    println!();
    println!("=== Sugar Intake ===");
    display_breakdown(&report.breakdown, "sugar");
    println!();
    println!(
        "Total: {:.1} g ({}% of daily calories)",
        report.total_sugar, report.sugar_pct
    );
    println!(
        "Ideal limit: {} g  Upper limit: {} g",
        report.max_safe, report.max_limit
    );
    println!("Status: {}", report.status.label());
    println!("{}", report.advice);
}

pub fn display_tdee(report: &TdeeReport) {
    println!("BMR:  {} kcal/day", report.bmr);
    println!("TDEE: {} kcal/day ({})", report.tdee, report.activity);
}

pub fn display_macros(split: &MacroSplit) {
    println!("Calories: {} kcal/day", split.calories);
    println!("  Protein: {:>6} g ({}%)", split.protein, split.protein_pct);
    println!("  Carbs:   {:>6} g ({}%)", split.carbs, split.carbs_pct);
    println!("  Fat:     {:>6} g ({}%)", split.fat, split.fat_pct);
}

pub fn display_hydration(report: &HydrationReport) {
    println!("Water: {}", report.recommendation);
    println!("Level: {}", report.level.label());
    println!("{}", report.advice);
    for (slot, liters) in &report.distribution {
        println!("  {:<8} {:.2} L", slot, liters);
    }
}

pub fn display_bmi(report: &BmiReport) {
    println!("BMI: {} ({})", report.bmi, report.category.label());
    println!("{}", report.advice);
    display_scale(&report.scale);
}

pub fn display_body_fat(report: &BodyFatReport) {
    println!("BMI method:  {}%", report.bf_bmi);
    match report.bf_navy {
        Some(navy) => println!("Navy method: {}%", navy),
        None => println!("Navy method: n/a"),
    }
    println!(
        "Body fat: {}% ({})",
        report.bf_final,
        report.category.label()
    );
    println!("Fat mass: {} kg  Lean mass: {} kg", report.fat_mass, report.lean_mass);
    println!("{}", report.advice);
    display_scale(&report.scale);
}

pub fn display_ideal_weight(report: &IdealWeightReport) {
    println!("Height: {} cm", report.height_cm);
    println!(
        "WHO healthy range: {} – {} kg",
        report.min_weight, report.max_weight
    );
    for (name, weight) in &report.formulas {
        println!("  {:<9} {} kg", name, weight);
    }
    if let Some(advice) = &report.advice {
        println!("{}", advice);
    }
    let s = &report.scale;
    println!(
        "Scale {}..{} kg  thresholds [{}, {}, {}]",
        s.min_display_weight, s.max_display_weight, s.w_under_end, s.w_normal_end, s.w_over_end
    );
    println!("  segments: {}", format_segments(&s.segments));
    if let Some(pointer) = s.pointer_pct {
        println!("  {}", gauge(pointer));
    }
}

pub fn display_calories_burned(report: &CaloriesBurnedReport) {
    println!("{} (MET {})", report.exercise, report.met);
    println!(
        "Burned: {} kcal ({} kcal/min)",
        report.calories, report.cal_per_min
    );
    display_list("Equivalent to", &report.food_eq);
    println!("  milestones: {:?}", report.scale.milestones);
    println!("  {}", gauge(report.scale.pointer_pct));
}

pub fn display_sleep(report: &SleepReport) {
    match report {
        SleepReport::Bedtime {
            bedtime,
            suggestions,
            advice,
        } => {
            println!("Going to bed at {}, wake up at:", bedtime);
            println!("  {}", suggestions.join("  "));
            println!("{}", advice);
        }
        SleepReport::Wakeup {
            wakeup,
            suggestions,
            advice,
        } => {
            println!("Waking up at {}, go to bed at:", wakeup);
            println!("  {}", suggestions.join("  "));
            println!("{}", advice);
        }
        SleepReport::Both {
            bedtime,
            wakeup,
            duration,
            cycles,
            advice,
            scale,
            ..
        } => {
            println!("{} -> {}: {} h ({} cycles)", bedtime, wakeup, duration, cycles);
            println!("{}", advice);
            println!(
                "  {}..{} h, target {} h  {}",
                scale.min_hr,
                scale.max_hr,
                scale.target_hr,
                gauge(scale.pointer_pct)
            );
        }
    }
}

pub fn display_sleep_debt(report: &SleepDebtReport) {
    println!(
        "Ideal: {} h/night  Average: {} h/night  over {} days",
        report.ideal, report.avg, report.days
    );
    println!("Sleep debt: {} h", report.total_debt);
    println!("{}", report.advice);
    println!(
        "  thresholds {:?} of {} h  {}",
        report.scale.thresholds,
        report.scale.max_debt,
        gauge(report.scale.pointer_pct)
    );
}

pub fn display_stress(report: &StressReport) {
    println!("Stress balance score: {}/100", report.score);
    println!(
        "Stress load: {}  Relaxation: {}",
        report.stress_total, report.relax_total
    );
    println!("{}", report.advice);
    println!("  {}", gauge(report.score as f64));
}

pub fn display_blood_pressure(report: &BloodPressureReport) {
    println!(
        "Systolic {} mmHg: {}",
        report.systolic,
        report.sys_cat.label()
    );
    println!(
        "Diastolic {} mmHg: {}",
        report.diastolic,
        report.dia_cat.label()
    );
    println!("Overall: {}", report.category.label());
    println!("{}", report.advice);
}

pub fn display_diabetes(report: &DiabetesReport) {
    println!("Risk score: {}", report.score);
    println!("Category: {}", report.category.label());
    println!("{}", report.advice);
    display_list("Tips", &report.tips);
}

pub fn display_alcohol(report: &AlcoholReport) {
    println!(
        "{} drinks/week ({}, limit {})",
        report.drinks, report.gender, report.safe_limit
    );
    println!(
        "Ethanol: {} g vs safe {} g ({}%)",
        report.ethanol, report.safe_ethanol, report.compare_pct
    );
    println!("Risk: {} (score {})", report.category.label(), report.score);
    println!("{}", report.advice);
    display_list("Tips", &report.tips);
}
