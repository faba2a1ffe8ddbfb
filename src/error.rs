//! Error types for assumption validation and scenario loading

use thiserror::Error;

/// Errors surfaced by the projection engine and its loaders
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// An assumption is outside the range the formulas are defined for
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectionError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Reject NaN/infinite and negative values
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(name, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid(name, format!("must be >= 0, got {value}")));
    }
    Ok(())
}

/// Reject NaN/infinite and non-positive values
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ProjectionError::invalid(name, format!("must be > 0, got {value}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = ProjectionError::invalid("initial_token_price", "must be > 0, got 0");
        assert_eq!(
            err.to_string(),
            "invalid parameter `initial_token_price`: must be > 0, got 0"
        );
    }

    #[test]
    fn test_range_guards() {
        assert!(ensure_non_negative("fee_rate", 0.0).is_ok());
        assert!(ensure_non_negative("fee_rate", -0.001).is_err());
        assert!(ensure_non_negative("fee_rate", f64::NAN).is_err());
        assert!(ensure_positive("price", 0.04).is_ok());
        assert!(ensure_positive("price", 0.0).is_err());
        assert!(ensure_positive("price", f64::INFINITY).is_err());
    }
}
