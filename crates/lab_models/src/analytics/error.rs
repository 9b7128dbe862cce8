//! Formula error types.

use lab_core::types::LabError;
use thiserror::Error;

/// Errors raised while evaluating a formula on already-validated inputs.
///
/// # Variants
/// - `DivisionByZero`: Zero denominator in a ratio
/// - `InvalidPosition`: Position parameters that cannot describe a trade
///
/// # Examples
/// ```
/// use lab_models::analytics::FormulaError;
///
/// let err = FormulaError::DivisionByZero { operation: "optimal hedge ratio" };
/// assert_eq!(err.to_string(), "Division by zero in optimal hedge ratio");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// Zero denominator in a ratio.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// Formula being evaluated
        operation: &'static str,
    },

    /// Position parameters that cannot describe a trade.
    #[error("Invalid position: {message}")]
    InvalidPosition {
        /// Description of the problem
        message: String,
    },
}

impl From<FormulaError> for LabError {
    fn from(err: FormulaError) -> Self {
        match err {
            FormulaError::DivisionByZero { operation } => LabError::division_by_zero(operation),
            FormulaError::InvalidPosition { message } => LabError::validation("position", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_to_lab_error() {
        let err: LabError = FormulaError::DivisionByZero {
            operation: "optimal hedge ratio",
        }
        .into();
        assert_eq!(
            err,
            LabError::DivisionByZero {
                operation: "optimal hedge ratio".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_position_to_lab_error() {
        let err: LabError = FormulaError::InvalidPosition {
            message: "lot size must be positive".to_string(),
        }
        .into();
        assert_eq!(err.field(), Some("position"));
    }
}
