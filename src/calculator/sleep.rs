//! Sleep-cycle timing and sleep debt.

use chrono::{NaiveTime, TimeDelta};
use serde::Serialize;

use crate::calculator::bands::{Band, Bands, Category};
use crate::calculator::constants::*;
use crate::calculator::scale::pointer_pct;
use crate::calculator::units::round_to;
use crate::error::{CalcError, Result, ensure_finite};

const TIME_INPUT_FORMAT: &str = "%H:%M";
const TIME_OUTPUT_FORMAT: &str = "%I:%M %p";

/// Parse a 24-hour `HH:MM` clock time.
pub fn parse_clock(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), TIME_INPUT_FORMAT).map_err(|e| {
        CalcError::InvalidInput(format!("time '{}' is not in HH:MM format: {}", input, e))
    })
}

fn cycle_offset(cycles: i64) -> TimeDelta {
    TimeDelta::minutes(FALL_ASLEEP_MINUTES + cycles * SLEEP_CYCLE_MINUTES)
}

/// Wake-up times for 3 to 6 full cycles after `bedtime`.
pub fn wake_times(bedtime: NaiveTime) -> Vec<NaiveTime> {
    (MIN_SUGGESTED_CYCLES..=MAX_SUGGESTED_CYCLES)
        .map(|cycles| bedtime + cycle_offset(cycles))
        .collect()
}

/// Bedtimes for 6 down to 3 full cycles before `wakeup`.
pub fn bedtimes(wakeup: NaiveTime) -> Vec<NaiveTime> {
    (MIN_SUGGESTED_CYCLES..=MAX_SUGGESTED_CYCLES)
        .rev()
        .map(|cycles| wakeup - cycle_offset(cycles))
        .collect()
}

/// Hours slept between two clock times, wrapping past midnight.
pub fn sleep_hours(bedtime: NaiveTime, wakeup: NaiveTime) -> f64 {
    let mut span = wakeup.signed_duration_since(bedtime);
    if wakeup < bedtime {
        span += TimeDelta::days(1);
    }
    span.num_seconds() as f64 / 3600.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SleepVerdict {
    TooShort,
    SlightlyShort,
    Optimal,
    Oversleeping,
}

impl Category for SleepVerdict {
    fn label(&self) -> &'static str {
        match self {
            SleepVerdict::TooShort => "Too short",
            SleepVerdict::SlightlyShort => "Slightly short",
            SleepVerdict::Optimal => "Optimal",
            SleepVerdict::Oversleeping => "Oversleeping",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            SleepVerdict::TooShort => {
                "❌ Too short — linked with fatigue, poor focus, and health risk."
            }
            SleepVerdict::SlightlyShort => {
                "⚠️ Slightly short — try extending to 7.5 hrs for full recovery."
            }
            SleepVerdict::Optimal => "✅ Optimal — excellent range for health and performance.",
            SleepVerdict::Oversleeping => {
                "⚠️ Oversleeping — too much sleep may signal fatigue or imbalance."
            }
        }
    }
}

fn sleep_bands() -> Bands<SleepVerdict> {
    Bands::new(
        vec![
            Band::below(6.0, SleepVerdict::TooShort),
            Band::below(7.5, SleepVerdict::SlightlyShort),
            Band::at_most(9.0, SleepVerdict::Optimal),
        ],
        SleepVerdict::Oversleeping,
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct SleepScale {
    pub min_hr: f64,
    pub max_hr: f64,
    pub target_hr: f64,
    pub pointer_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SleepReport {
    Bedtime {
        bedtime: String,
        suggestions: Vec<String>,
        advice: String,
    },
    Wakeup {
        wakeup: String,
        suggestions: Vec<String>,
        advice: String,
    },
    Both {
        bedtime: String,
        wakeup: String,
        duration: f64,
        cycles: f64,
        verdict: SleepVerdict,
        advice: String,
        scale: SleepScale,
    },
}

fn format_times(times: Vec<NaiveTime>) -> Vec<String> {
    times
        .into_iter()
        .map(|t| t.format(TIME_OUTPUT_FORMAT).to_string())
        .collect()
}

/// Suggest wake-up times, bedtimes or assess a full night, depending on
/// which times are given.
pub fn calculate_sleep(bedtime: Option<&str>, wakeup: Option<&str>) -> Result<SleepReport> {
    let bedtime = bedtime.map(str::trim).filter(|s| !s.is_empty());
    let wakeup = wakeup.map(str::trim).filter(|s| !s.is_empty());

    match (bedtime, wakeup) {
        (Some(bt), None) => Ok(SleepReport::Bedtime {
            bedtime: bt.to_string(),
            suggestions: format_times(wake_times(parse_clock(bt)?)),
            advice: "Aim for 5–6 cycles (~7.5–9 hrs). Pick a wake time that fits your lifestyle."
                .to_string(),
        }),
        (None, Some(wu)) => Ok(SleepReport::Wakeup {
            wakeup: wu.to_string(),
            suggestions: format_times(bedtimes(parse_clock(wu)?)),
            advice: "Going to bed at these times ensures you complete healthy sleep cycles."
                .to_string(),
        }),
        (Some(bt), Some(wu)) => {
            let hours = sleep_hours(parse_clock(bt)?, parse_clock(wu)?);
            let verdict = sleep_bands().classify(hours);
            let pointer = round_to(
                pointer_pct(hours, SLEEP_SCALE_MIN_HOURS, SLEEP_SCALE_MAX_HOURS),
                2,
            );

            Ok(SleepReport::Both {
                bedtime: bt.to_string(),
                wakeup: wu.to_string(),
                duration: round_to(hours, 2),
                cycles: round_to(hours * 60.0 / SLEEP_CYCLE_MINUTES as f64, 1),
                verdict,
                advice: verdict.advice().to_string(),
                scale: SleepScale {
                    min_hr: SLEEP_SCALE_MIN_HOURS,
                    max_hr: SLEEP_SCALE_MAX_HOURS,
                    target_hr: SLEEP_TARGET_HOURS,
                    pointer_pct: pointer,
                },
            })
        }
        (None, None) => Err(CalcError::InvalidInput(
            "Please provide at least bedtime or wake-up time.".to_string(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Sleep debt
// ---------------------------------------------------------------------------

/// Recommended nightly hours for an age.
pub fn ideal_sleep_hours(age: u32) -> f64 {
    match age {
        0..=13 => 9.0,
        14..=17 => 8.5,
        18..=64 => 8.0,
        _ => 7.5,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SleepDebtLevel {
    None,
    Mild,
    Moderate,
    Severe,
}

impl Category for SleepDebtLevel {
    fn label(&self) -> &'static str {
        match self {
            SleepDebtLevel::None => "No debt",
            SleepDebtLevel::Mild => "Mild",
            SleepDebtLevel::Moderate => "Moderate",
            SleepDebtLevel::Severe => "Severe",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            SleepDebtLevel::None => {
                "✅ No sleep debt — you’re meeting or exceeding your ideal sleep."
            }
            SleepDebtLevel::Mild => "⚠️ Mild sleep debt — try going to bed earlier or adding naps.",
            SleepDebtLevel::Moderate => {
                "❌ Moderate debt — recovery sleep needed. Aim for a few nights of 8–9 hrs."
            }
            SleepDebtLevel::Severe => {
                "🚨 Severe debt — linked to major fatigue, mood issues, and health risks."
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SleepDebtScale {
    pub pointer_pct: f64,
    pub thresholds: Vec<f64>,
    pub max_debt: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SleepDebtReport {
    pub avg: f64,
    pub ideal: f64,
    pub days: u32,
    pub total_debt: f64,
    pub level: SleepDebtLevel,
    pub advice: String,
    pub scale: SleepDebtScale,
}

pub fn calculate_sleep_debt(avg_hours: f64, age: u32, days: u32) -> Result<SleepDebtReport> {
    let ideal = ideal_sleep_hours(age);
    let total_debt = round_to(
        ensure_finite((ideal - avg_hours) * days as f64, "sleep debt")?,
        1,
    );

    let level = Bands::new(
        vec![
            Band::at_most(0.0, SleepDebtLevel::None),
            Band::at_most(5.0, SleepDebtLevel::Mild),
            Band::at_most(14.0, SleepDebtLevel::Moderate),
        ],
        SleepDebtLevel::Severe,
    )
    .classify(total_debt);

    Ok(SleepDebtReport {
        avg: avg_hours,
        ideal,
        days,
        total_debt,
        level,
        advice: level.advice().to_string(),
        scale: SleepDebtScale {
            pointer_pct: round_to(pointer_pct(total_debt, 0.0, SLEEP_DEBT_SCALE_MAX), 1),
            thresholds: SLEEP_DEBT_THRESHOLDS.to_vec(),
            max_debt: SLEEP_DEBT_SCALE_MAX,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_debt_rejects_non_finite_average() {
        assert!(matches!(
            calculate_sleep_debt(f64::NAN, 30, 7),
            Err(CalcError::CalculationFailed(_))
        ));
        assert!(matches!(
            calculate_sleep_debt(f64::INFINITY, 30, 7),
            Err(CalcError::CalculationFailed(_))
        ));
    }

    #[test]
    fn test_full_night_example() {
        let report = calculate_sleep(Some("23:00"), Some("06:30")).unwrap();
        match report {
            SleepReport::Both {
                duration,
                cycles,
                verdict,
                advice,
                scale,
                ..
            } => {
                assert_eq!(duration, 7.5);
                assert_eq!(cycles, 5.0);
                assert_eq!(verdict, SleepVerdict::Optimal);
                assert!(advice.starts_with("✅ Optimal"));
                assert_eq!(scale.pointer_pct, 43.75);
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_bedtime_suggestions_wrap_midnight() {
        let report = calculate_sleep(Some("23:00"), None).unwrap();
        let SleepReport::Bedtime { suggestions, .. } = report else {
            panic!("expected bedtime mode");
        };
        assert_eq!(
            suggestions,
            vec!["03:45 AM", "05:15 AM", "06:45 AM", "08:15 AM"]
        );
    }

    #[test]
    fn test_wakeup_suggestions_descend_from_six_cycles() {
        let report = calculate_sleep(None, Some("07:00")).unwrap();
        let SleepReport::Wakeup { suggestions, .. } = report else {
            panic!("expected wakeup mode");
        };
        assert_eq!(
            suggestions,
            vec!["09:45 PM", "11:15 PM", "12:45 AM", "02:15 AM"]
        );
    }

    #[test]
    fn test_same_times_is_zero_duration() {
        assert_eq!(
            sleep_hours(parse_clock("22:00").unwrap(), parse_clock("22:00").unwrap()),
            0.0
        );
    }

    #[test]
    fn test_missing_or_bad_times_are_invalid_input() {
        assert!(matches!(
            calculate_sleep(None, None),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_sleep(Some(""), Some("  ")),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_sleep(Some("25:61"), None),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_duration_bands() {
        let bands = sleep_bands();
        assert_eq!(bands.classify(5.99), SleepVerdict::TooShort);
        assert_eq!(bands.classify(6.0), SleepVerdict::SlightlyShort);
        assert_eq!(bands.classify(7.5), SleepVerdict::Optimal);
        assert_eq!(bands.classify(9.0), SleepVerdict::Optimal);
        assert_eq!(bands.classify(9.01), SleepVerdict::Oversleeping);
    }

    #[test]
    fn test_ideal_hours_by_age() {
        assert_eq!(ideal_sleep_hours(13), 9.0);
        assert_eq!(ideal_sleep_hours(17), 8.5);
        assert_eq!(ideal_sleep_hours(64), 8.0);
        assert_eq!(ideal_sleep_hours(65), 7.5);
    }

    #[test]
    fn test_sleep_debt_levels() {
        let report = calculate_sleep_debt(6.0, 30, DEFAULT_DEBT_DAYS).unwrap();
        assert_eq!(report.total_debt, 14.0);
        assert_eq!(report.level, SleepDebtLevel::Moderate);
        assert_eq!(report.scale.pointer_pct, 50.0);

        let rested = calculate_sleep_debt(9.0, 30, 7).unwrap();
        assert_eq!(rested.total_debt, -7.0);
        assert_eq!(rested.level, SleepDebtLevel::None);
        assert_eq!(rested.scale.pointer_pct, 0.0);

        let severe = calculate_sleep_debt(4.0, 30, 7).unwrap();
        assert_eq!(severe.level, SleepDebtLevel::Severe);
        assert_eq!(severe.scale.pointer_pct, 100.0);
    }
}
