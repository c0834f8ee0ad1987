//! Gauge geometry: segment widths and pointer position as percentages.

use serde::Serialize;

use crate::calculator::units::round_to;

/// Smallest denominator used when a gauge has no width.
pub const MIN_SCALE_SPAN: f64 = 1e-6;

/// A gauge over `[min_value, max_value]` split at `thresholds`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    pub min_value: f64,
    pub max_value: f64,
    pub thresholds: Vec<f64>,
    /// One width per threshold, rounded to 2 decimals.
    pub segments: Vec<f64>,
    /// Position of the value, clamped to [0, 100].
    pub pointer_pct: f64,
}

fn span(min: f64, max: f64) -> f64 {
    let span = max - min;
    if span > 0.0 { span } else { MIN_SCALE_SPAN }
}

/// Percentage widths of the segments ending at each threshold.
///
/// Widths are clamped at zero and then rescaled to sum to 100.
pub fn segments(min: f64, max: f64, thresholds: &[f64]) -> Vec<f64> {
    let denom = span(min, max);
    let mut previous = min;
    let mut widths: Vec<f64> = thresholds
        .iter()
        .map(|&t| {
            let width = ((t - previous) / denom * 100.0).max(0.0);
            previous = t;
            width
        })
        .collect();

    let total: f64 = widths.iter().sum();
    if total > 0.0 && total != 100.0 {
        let factor = 100.0 / total;
        for w in &mut widths {
            *w *= factor;
        }
    }
    widths
}

/// Position of `value` across `[min, max]`, clamped to [0, 100].
pub fn pointer_pct(value: f64, min: f64, max: f64) -> f64 {
    let pct = (value - min) / span(min, max) * 100.0;
    if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
}

pub fn scale(value: f64, min: f64, max: f64, thresholds: &[f64]) -> Scale {
    Scale {
        min_value: min,
        max_value: max,
        thresholds: thresholds.to_vec(),
        segments: segments(min, max, thresholds)
            .into_iter()
            .map(|w| round_to(w, 2))
            .collect(),
        pointer_pct: pointer_pct(value, min, max),
    }
}
