//! # Lab Quiz
//!
//! Closing quiz of the futures lab and the certificate issued on passing.
//!
//! This crate provides:
//! - The ten-question answer key (`question`)
//! - An answer sheet graded on submission (`grader`)
//! - Certificate issuance and SVG rendering (`certificate`)
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use lab_quiz::{Certificate, CertificateRenderer, QuizSheet, SvgCertificate, DEFAULT_INSTRUCTOR};
//!
//! let mut sheet = QuizSheet::new();
//! for (q, a) in [(1, "Short"), (2, "Zero"), (3, "110"), (4, "500"), (5, "1"), (7, "Contango")] {
//!     sheet.answer_text(q, a).unwrap();
//! }
//! let result = sheet.submit();
//! assert_eq!(result.score(), 6);
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
//! let cert = Certificate::for_result("Asha", &result, date, DEFAULT_INSTRUCTOR).unwrap();
//! let svg = SvgCertificate.render(&cert).unwrap();
//! assert!(String::from_utf8(svg).unwrap().contains("Score: 6/10"));
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod certificate;
pub mod error;
pub mod grader;
pub mod question;

pub use certificate::{
    Certificate, CertificateRenderer, DocumentFormat, SvgCertificate, DATE_FORMAT,
    DEFAULT_INSTRUCTOR,
};
pub use error::{CertificateError, QuizError};
pub use grader::{QuestionOutcome, QuizResult, QuizSheet};
pub use question::{AnswerKey, Question, QuizAnswer, PASS_MARK, QUESTIONS, QUESTION_COUNT};
