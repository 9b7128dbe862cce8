//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: A scenario parameter failed its declared domain or kind
//! - `LabError`: The lab-wide error taxonomy surfaced to the presentation layer

use thiserror::Error;

use super::param::ParamId;

/// Parameter validation errors.
///
/// Every variant names the offending field so the presentation layer can
/// point the user at the widget to correct. Values are never clamped.
///
/// # Variants
/// - `Missing`: Required parameter absent from the snapshot
/// - `OutOfRange`: Numeric value outside its closed interval
/// - `NonFinite`: NaN or infinite numeric value
/// - `NotInteger`: Fractional value for a count parameter
/// - `WrongKind`: Text supplied for a number or vice versa
/// - `UnknownChoice`: Categorical value not in the option menu
///
/// # Examples
/// ```
/// use lab_core::types::{ParamId, ValidationError};
///
/// let err = ValidationError::OutOfRange {
///     field: ParamId::Correlation,
///     value: 1.5,
///     min: 0.0,
///     max: 1.0,
/// };
/// assert_eq!(err.to_string(), "correlation = 1.5 outside [0, 1]");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required parameter absent from the snapshot.
    #[error("missing required parameter '{field}'")]
    Missing {
        /// The absent parameter
        field: ParamId,
    },

    /// Numeric value outside its closed interval.
    #[error("{field} = {value} outside [{min}, {max}]")]
    OutOfRange {
        /// The offending parameter
        field: ParamId,
        /// The rejected value
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// NaN or infinite numeric value.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// The offending parameter
        field: ParamId,
        /// The rejected value
        value: f64,
    },

    /// Fractional value supplied for a count parameter.
    #[error("{field} must be a whole number, got {value}")]
    NotInteger {
        /// The offending parameter
        field: ParamId,
        /// The rejected value
        value: f64,
    },

    /// Value of the wrong kind (text for a number or vice versa).
    #[error("{field} expects {expected}")]
    WrongKind {
        /// The offending parameter
        field: ParamId,
        /// Description of the expected kind
        expected: &'static str,
    },

    /// Categorical value outside the option menu.
    #[error("unknown {field} '{value}', expected one of: {allowed}")]
    UnknownChoice {
        /// The offending parameter
        field: ParamId,
        /// The rejected value
        value: String,
        /// Comma-separated list of accepted options
        allowed: String,
    },
}

impl ValidationError {
    /// Returns the parameter this error refers to.
    pub fn field(&self) -> ParamId {
        match self {
            ValidationError::Missing { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NonFinite { field, .. }
            | ValidationError::NotInteger { field, .. }
            | ValidationError::WrongKind { field, .. }
            | ValidationError::UnknownChoice { field, .. } => *field,
        }
    }
}

/// Lab-wide error taxonomy.
///
/// Each failure is isolated to the module, quiz, or certificate request that
/// raised it; the caller withholds the corresponding output and reports the
/// message.
///
/// # Variants
/// - `Validation`: Input outside its declared domain
/// - `DivisionByZero`: Zero denominator in a ratio formula
/// - `PreconditionNotMet`: Certificate requested without a passing score or a name
///
/// # Examples
/// ```
/// use lab_core::types::LabError;
///
/// let err = LabError::division_by_zero("optimal hedge ratio");
/// assert_eq!(err.to_string(), "Division by zero in optimal hedge ratio");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabError {
    /// Input outside its declared domain.
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Name of the offending field
        field: String,
        /// Human-readable reason
        reason: String,
    },

    /// Zero denominator in a ratio formula.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The formula that was being evaluated
        operation: String,
    },

    /// A precondition for producing an output was not satisfied.
    #[error("Precondition not met: {0}")]
    PreconditionNotMet(String),
}

impl LabError {
    /// Create a validation error for a named field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a division-by-zero error for a named operation.
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Create a precondition error.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionNotMet(msg.into())
    }

    /// Returns the offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            LabError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<ValidationError> for LabError {
    fn from(err: ValidationError) -> Self {
        LabError::Validation {
            field: err.field().name().to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_display() {
        let err = ValidationError::Missing {
            field: ParamId::Spot,
        };
        assert_eq!(err.to_string(), "missing required parameter 'spot'");
    }

    #[test]
    fn test_not_integer_display() {
        let err = ValidationError::NotInteger {
            field: ParamId::Contracts,
            value: 2.5,
        };
        assert_eq!(err.to_string(), "contracts must be a whole number, got 2.5");
    }

    #[test]
    fn test_unknown_choice_display() {
        let err = ValidationError::UnknownChoice {
            field: ParamId::Decision,
            value: "Maybe".to_string(),
            allowed: "Long USD, Short USD".to_string(),
        };
        assert!(err.to_string().contains("Maybe"));
        assert!(err.to_string().contains("Short USD"));
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::WrongKind {
            field: ParamId::Beta,
            expected: "a number",
        };
        assert_eq!(err.field(), ParamId::Beta);
    }

    #[test]
    fn test_validation_into_lab_error_names_field() {
        let err: LabError = ValidationError::OutOfRange {
            field: ParamId::Contracts,
            value: -1.0,
            min: 0.0,
            max: 100.0,
        }
        .into();
        assert_eq!(err.field(), Some("contracts"));
        assert!(err.to_string().starts_with("Invalid contracts:"));
    }

    #[test]
    fn test_precondition_display() {
        let err = LabError::precondition("score 4/10 is below the pass mark");
        assert_eq!(
            err.to_string(),
            "Precondition not met: score 4/10 is below the pass mark"
        );
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = LabError::division_by_zero("ratio");
        let _: &dyn std::error::Error = &err;
    }
}
