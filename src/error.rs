use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Calculation failed: {0}")]
    CalculationFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculator not found: {0}")]
    UnknownCalculator(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Reject NaN and infinite results coming out of a formula.
pub fn ensure_finite(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::CalculationFailed(format!(
            "{} is not a finite number",
            what
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite(1.5, "bmi").unwrap(), 1.5);
        let err = ensure_finite(f64::NAN, "body fat").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Calculation failed: body fat is not a finite number"
        );
        assert!(ensure_finite(f64::INFINITY, "x").is_err());
    }
}
