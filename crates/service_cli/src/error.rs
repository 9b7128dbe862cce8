//! CLI error types.

use std::path::PathBuf;

use lab_core::types::LabError;
use lab_quiz::{CertificateError, QuizError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `futures-lab` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine validation, arithmetic, or precondition failure
    #[error(transparent)]
    Lab(#[from] LabError),

    /// Rejected quiz answer
    #[error(transparent)]
    Quiz(#[from] QuizError),

    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Result could not be serialised
    #[error("Output error: {0}")]
    Output(String),

    /// File system failure
    #[error("Failed to write {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl From<CertificateError> for CliError {
    fn from(err: CertificateError) -> Self {
        CliError::Lab(err.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_refusal_is_precondition() {
        let err: CliError = CertificateError::EmptyName.into();
        assert_eq!(
            err.to_string(),
            "Precondition not met: recipient name is empty"
        );
    }

    #[test]
    fn test_lab_error_is_transparent() {
        let err: CliError = LabError::division_by_zero("optimal hedge ratio").into();
        assert_eq!(err.to_string(), "Division by zero in optimal hedge ratio");
    }
}
