//! Quiz and certificate error types.

use lab_core::types::LabError;
use thiserror::Error;

/// Errors raised while recording quiz answers.
///
/// # Examples
/// ```
/// use lab_quiz::QuizError;
///
/// let err = QuizError::UnknownQuestion { question: 11 };
/// assert_eq!(err.to_string(), "Unknown question 11 (expected 1 to 10)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuizError {
    /// Question number outside the sheet.
    #[error("Unknown question {question} (expected 1 to 10)")]
    UnknownQuestion {
        /// Number given
        question: u8,
    },

    /// Answer of the wrong kind, not among the options, or non-finite.
    #[error("Invalid answer to question {question}: {reason}")]
    InvalidAnswer {
        /// Question number
        question: u8,
        /// What was wrong with the answer
        reason: String,
    },
}

impl QuizError {
    /// Question the error refers to.
    pub fn question(&self) -> u8 {
        match self {
            QuizError::UnknownQuestion { question } | QuizError::InvalidAnswer { question, .. } => {
                *question
            }
        }
    }
}

impl From<QuizError> for LabError {
    fn from(err: QuizError) -> Self {
        let field = format!("q{}", err.question());
        match err {
            QuizError::UnknownQuestion { .. } => LabError::validation(field, "no such question"),
            QuizError::InvalidAnswer { reason, .. } => LabError::validation(field, reason),
        }
    }
}

/// Errors raised while issuing or rendering a certificate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CertificateError {
    /// Score below the pass mark.
    #[error("score {score}/10 is below the pass mark of {required}")]
    ScoreTooLow {
        /// Score achieved
        score: u8,
        /// Pass mark
        required: u8,
    },

    /// Score above the number of questions.
    #[error("score {score} exceeds the maximum of 10")]
    ScoreOutOfRange {
        /// Score given
        score: u8,
    },

    /// Name empty after trimming.
    #[error("recipient name is empty")]
    EmptyName,

    /// Document could not be written.
    #[error("Failed to render certificate: {message}")]
    Render {
        /// Underlying writer error
        message: String,
    },
}

impl From<CertificateError> for LabError {
    fn from(err: CertificateError) -> Self {
        LabError::precondition(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_error_names_question() {
        let err: LabError = QuizError::InvalidAnswer {
            question: 7,
            reason: "expected one of: Contango, Backwardation".to_string(),
        }
        .into();
        assert_eq!(err.field(), Some("q7"));
    }

    #[test]
    fn test_certificate_error_is_precondition() {
        let err: LabError = CertificateError::ScoreTooLow {
            score: 4,
            required: 5,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Precondition not met: score 4/10 is below the pass mark of 5"
        );
    }

    #[test]
    fn test_empty_name_message() {
        let err: LabError = CertificateError::EmptyName.into();
        assert!(matches!(err, LabError::PreconditionNotMet(_)));
    }
}
