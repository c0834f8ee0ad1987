use assert_float_eq::*;

use health_calc_rs::calculator::{
    AlcoholInput, AlcoholRisk, BloodPressureInput, BmiCategory, BodyProfile, BpCategory,
    SleepReport, SugarInput, SugarStatus, aggregate, bmr, calculate_alcohol,
    calculate_blood_pressure, calculate_bmi, calculate_sleep, calculate_sugar, normalize,
    pointer_pct, round_to, scale, segments, tdee,
};
use health_calc_rs::models::{ActivityLevel, ConsumptionLine, DrinkingPattern, Gender};
use health_calc_rs::tables::{PROTEIN_TABLE, SUGAR_TABLE};

#[test]
fn test_per_hundred_normalize_is_linear() {
    for q in [0.0, 1.0, 37.5, 100.0, 250.0] {
        for k in [0.5, 2.0, 3.0] {
            let scaled = normalize(18.0, "per 100g", k * q);
            let expected = k * normalize(18.0, "per 100g", q);
            assert_float_absolute_eq!(scaled, expected, 1e-9);
        }
    }
}

#[test]
fn test_aggregate_total_matches_breakdown() {
    let cases: Vec<Vec<ConsumptionLine>> = vec![
        vec![],
        vec![ConsumptionLine::new("Nope", 10.0), ConsumptionLine::new("Also Nope", 1.0)],
        vec![
            ConsumptionLine::new("Paneer", 123.0),
            ConsumptionLine::new("Egg", 3.0),
            ConsumptionLine::new("Whey Protein", 1.5),
            ConsumptionLine::new("Unknown", 50.0),
        ],
    ];

    for lines in cases {
        let result = aggregate(&PROTEIN_TABLE, &lines, None);
        let sum: f64 = result.breakdown.iter().map(|b| b.amount).sum();
        // Each amount is rounded separately, so allow half a cent per line.
        let tolerance = 0.005 * result.breakdown.len() as f64 + 1e-9;
        assert_float_absolute_eq!(result.total, sum, tolerance);
        assert!(result.total >= 0.0);
    }
}

#[test]
fn test_breakdown_amounts_round_like_reference() {
    // (food, quantity, rounded amount) from the reference calculator.
    let cases = [
        ("Curd", 5.0, 0.17),
        ("Curd", 15.0, 0.53),
        ("Paneer", 123.0, 22.14),
        ("Egg", 3.0, 18.0),
    ];
    for (food, qty, expected) in cases {
        let result = aggregate(&PROTEIN_TABLE, &[ConsumptionLine::new(food, qty)], None);
        assert_eq!(result.breakdown[0].amount, expected, "{} x {}", food, qty);
    }
}

#[test]
fn test_round_to_reference_values() {
    assert_eq!(round_to(0.175, 2), 0.17);
    assert_eq!(round_to(0.525, 2), 0.53);
    assert_eq!(round_to(2008.5, 0), 2008.0);
}

#[test]
fn test_sugar_status_near_limits() {
    // 70 kg: safe up to 26.2 g, upper limit 52.5 g.
    let cases = [
        (26.2, SugarStatus::Safe),
        (26.204, SugarStatus::Moderate),
        (52.5, SugarStatus::Moderate),
        (52.504, SugarStatus::HighRisk),
    ];
    for (grams, expected) in cases {
        let report = calculate_sugar(
            &SUGAR_TABLE,
            &SugarInput {
                weight_kg: 70.0,
                lines: vec![ConsumptionLine::new("Table Sugar", grams)],
            },
        )
        .unwrap();
        assert_eq!(report.status, expected, "{} g", grams);
        assert_eq!(report.total_sugar, round_to(grams, 1));
    }
}

#[test]
fn test_all_invalid_foods_give_empty_result() {
    let lines = vec![ConsumptionLine::new("Cheeseburger", 2.0)];
    let result = aggregate(&SUGAR_TABLE, &lines, Some(10.0));
    assert_eq!(result.total, 0.0);
    assert!(result.breakdown.is_empty());
}

#[test]
fn test_scale_segments_sum_to_hundred() {
    let sets: [(f64, f64, &[f64]); 3] = [
        (15.0, 40.0, &[18.5, 24.9, 29.9, 40.0]),
        (5.0, 50.0, &[6.0, 13.0, 17.0, 24.0, 50.0]),
        (5.0, 50.0, &[14.0, 20.0, 24.0, 31.0, 50.0]),
    ];
    for (min, max, thresholds) in sets {
        let total: f64 = segments(min, max, thresholds).iter().sum();
        assert_float_absolute_eq!(total, 100.0, 1e-6);
    }
}

#[test]
fn test_pointer_is_monotonic_and_anchored() {
    let mut last = -1.0;
    let mut value = 10.0;
    while value <= 45.0 {
        let p = pointer_pct(value, 15.0, 40.0);
        assert!(p >= last);
        assert!((0.0..=100.0).contains(&p));
        last = p;
        value += 0.25;
    }
    assert_eq!(scale(15.0, 15.0, 40.0, &[40.0]).pointer_pct, 0.0);
    assert_eq!(scale(40.0, 15.0, 40.0, &[40.0]).pointer_pct, 100.0);
}

#[test]
fn test_bmi_reference_value() {
    let report = calculate_bmi(70.0, 175.0).unwrap();
    assert_eq!(report.bmi, 22.9);
    assert_eq!(report.category, BmiCategory::Normal);
}

#[test]
fn test_tdee_reference_value() {
    let profile = BodyProfile {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 25,
        gender: Gender::Male,
    };
    assert_float_absolute_eq!(bmr(&profile), 1673.75, 1e-9);
    assert_float_absolute_eq!(tdee(&profile, ActivityLevel::Sedentary), 2008.5, 1e-9);
}

#[test]
fn test_blood_pressure_reference_value() {
    let report = calculate_blood_pressure(&BloodPressureInput {
        systolic: 185,
        diastolic: 70,
        age: None,
        family_history: false,
    })
    .unwrap();
    assert_eq!(report.sys_cat, BpCategory::Crisis);
    assert_eq!(report.dia_cat, BpCategory::Normal);
    assert_eq!(report.category, BpCategory::Crisis);
}

#[test]
fn test_alcohol_reference_values() {
    let male = |drinks, pattern| AlcoholInput {
        drinks,
        gender: Gender::Male,
        weight_kg: None,
        pattern,
    };

    let report = calculate_alcohol(&male(20, DrinkingPattern::Spread)).unwrap();
    assert_eq!(report.category, AlcoholRisk::Moderate);

    let report = calculate_alcohol(&male(10, DrinkingPattern::Binge)).unwrap();
    assert_eq!(report.category, AlcoholRisk::Low);
    assert!(report.advice.contains("binge drinking is harmful"));
    assert!(report.tips[0].starts_with("Avoid binge sessions"));
}

#[test]
fn test_sleep_reference_value() {
    let report = calculate_sleep(Some("23:00"), Some("06:30")).unwrap();
    let SleepReport::Both {
        duration,
        cycles,
        advice,
        ..
    } = report
    else {
        panic!("expected a full-night report");
    };
    assert_eq!(duration, 7.5);
    assert_eq!(cycles, 5.0);
    assert!(advice.contains("Optimal"));
}
