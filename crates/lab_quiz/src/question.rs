//! The ten-question answer key.

use std::fmt;

use crate::error::QuizError;

/// Number of questions on a sheet.
pub const QUESTION_COUNT: u8 = 10;

/// Minimum score for a certificate.
pub const PASS_MARK: u8 = 5;

/// A submitted answer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum QuizAnswer {
    /// One of the question's options
    Choice(String),
    /// A numeric response
    Numeric(f64),
}

impl fmt::Display for QuizAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizAnswer::Choice(s) => f.write_str(s),
            QuizAnswer::Numeric(v) => write!(f, "{}", v),
        }
    }
}

/// How a question is answered and checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnswerKey {
    /// Pick one option; correct when equal to `expected`.
    Choice {
        /// Offered options
        options: &'static [&'static str],
        /// Correct option
        expected: &'static str,
    },
    /// Type a number; correct when `|given - expected| < tolerance`.
    Numeric {
        /// Correct value
        expected: f64,
        /// Strict tolerance
        tolerance: f64,
    },
}

/// A quiz question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Question {
    /// Question number, 1-based
    pub number: u8,
    /// Prompt text
    pub prompt: &'static str,
    /// Answer key
    pub key: AnswerKey,
}

/// The quiz, in sheet order.
pub const QUESTIONS: [Question; QUESTION_COUNT as usize] = [
    Question {
        number: 1,
        prompt: "Market falls → who gains?",
        key: AnswerKey::Choice {
            options: &["Long", "Short"],
            expected: "Short",
        },
    },
    Question {
        number: 2,
        prompt: "Basis at expiry?",
        key: AnswerKey::Choice {
            options: &["Zero", "Large"],
            expected: "Zero",
        },
    },
    Question {
        number: 3,
        prompt: "Spot 100, r 10%: futures?",
        key: AnswerKey::Numeric {
            expected: 110.0,
            tolerance: 1.0,
        },
    },
    Question {
        number: 4,
        prompt: "Buy 200 → 210, size 50: P&L?",
        key: AnswerKey::Numeric {
            expected: 500.0,
            tolerance: 1.0,
        },
    },
    Question {
        number: 5,
        prompt: "Hedge contracts for ₹10L?",
        key: AnswerKey::Numeric {
            expected: 1.0,
            tolerance: 0.5,
        },
    },
    Question {
        number: 6,
        prompt: "MTM reduces?",
        key: AnswerKey::Choice {
            options: &["Credit risk", "Return"],
            expected: "Credit risk",
        },
    },
    Question {
        number: 7,
        prompt: "Futures > spot?",
        key: AnswerKey::Choice {
            options: &["Contango", "Backwardation"],
            expected: "Contango",
        },
    },
    Question {
        number: 8,
        prompt: "Best hedge correlation?",
        key: AnswerKey::Choice {
            options: &["High", "Low"],
            expected: "High",
        },
    },
    Question {
        number: 9,
        prompt: "Rolling means?",
        key: AnswerKey::Choice {
            options: &["Close & reopen", "Hold"],
            expected: "Close & reopen",
        },
    },
    Question {
        number: 10,
        prompt: "Short 500 → 520, size 10: loss?",
        key: AnswerKey::Numeric {
            expected: 200.0,
            tolerance: 1.0,
        },
    },
];

impl Question {
    /// Looks up question `number` (1 to 10).
    pub fn get(number: u8) -> Result<&'static Question, QuizError> {
        number
            .checked_sub(1)
            .and_then(|i| QUESTIONS.get(usize::from(i)))
            .ok_or(QuizError::UnknownQuestion { question: number })
    }

    /// Validates `answer` against this question's kind and options.
    ///
    /// Choices are matched ignoring ASCII case and returned in canonical
    /// spelling.
    pub fn accept(&self, answer: QuizAnswer) -> Result<QuizAnswer, QuizError> {
        match (self.key, answer) {
            (AnswerKey::Choice { options, .. }, QuizAnswer::Choice(raw)) => {
                let needle = raw.trim();
                options
                    .iter()
                    .find(|opt| opt.eq_ignore_ascii_case(needle))
                    .map(|opt| QuizAnswer::Choice((*opt).to_string()))
                    .ok_or_else(|| self.invalid(format!("expected one of: {}", options.join(", "))))
            }
            (AnswerKey::Numeric { .. }, QuizAnswer::Numeric(v)) if v.is_finite() => {
                Ok(QuizAnswer::Numeric(v))
            }
            (AnswerKey::Numeric { .. }, QuizAnswer::Numeric(v)) => {
                Err(self.invalid(format!("{} is not a finite number", v)))
            }
            (AnswerKey::Choice { .. }, QuizAnswer::Numeric(_)) => {
                Err(self.invalid("expected one of the options, got a number"))
            }
            (AnswerKey::Numeric { .. }, QuizAnswer::Choice(raw)) => {
                Err(self.invalid(format!("expected a number, got '{}'", raw)))
            }
        }
    }

    /// Parses collector text according to the question kind, then validates it.
    ///
    /// # Examples
    /// ```
    /// use lab_quiz::{Question, QuizAnswer};
    ///
    /// let q3 = Question::get(3).unwrap();
    /// assert_eq!(q3.parse_answer("110").unwrap(), QuizAnswer::Numeric(110.0));
    ///
    /// let q9 = Question::get(9).unwrap();
    /// assert_eq!(
    ///     q9.parse_answer("close & REOPEN").unwrap(),
    ///     QuizAnswer::Choice("Close & reopen".into())
    /// );
    /// ```
    pub fn parse_answer(&self, raw: &str) -> Result<QuizAnswer, QuizError> {
        let answer = match self.key {
            AnswerKey::Choice { .. } => QuizAnswer::Choice(raw.to_string()),
            AnswerKey::Numeric { .. } => match raw.trim().parse::<f64>() {
                Ok(v) => QuizAnswer::Numeric(v),
                Err(_) => QuizAnswer::Choice(raw.to_string()),
            },
        };
        self.accept(answer)
    }

    /// Returns whether `answer` is correct. Answers of the wrong kind are wrong.
    pub fn is_correct(&self, answer: &QuizAnswer) -> bool {
        match (self.key, answer) {
            (AnswerKey::Choice { expected, .. }, QuizAnswer::Choice(given)) => given == expected,
            (AnswerKey::Numeric { expected, tolerance }, QuizAnswer::Numeric(given)) => {
                (given - expected).abs() < tolerance
            }
            _ => false,
        }
    }

    /// Options offered, empty for numeric questions.
    pub fn options(&self) -> &'static [&'static str] {
        match self.key {
            AnswerKey::Choice { options, .. } => options,
            AnswerKey::Numeric { .. } => &[],
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> QuizError {
        QuizError::InvalidAnswer {
            question: self.number,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_numbers_are_sequential() {
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(usize::from(q.number), i + 1);
            assert_eq!(Question::get(q.number).unwrap(), q);
        }
    }

    #[test]
    fn test_unknown_question() {
        assert_eq!(
            Question::get(0),
            Err(QuizError::UnknownQuestion { question: 0 })
        );
        assert!(Question::get(11).is_err());
    }

    #[test]
    fn test_expected_choices_are_offered() {
        for q in &QUESTIONS {
            if let AnswerKey::Choice { options, expected } = q.key {
                assert!(options.contains(&expected), "question {}", q.number);
            }
        }
    }

    #[test]
    fn test_numeric_tolerance_is_strict() {
        let q3 = Question::get(3).unwrap();
        assert!(q3.is_correct(&QuizAnswer::Numeric(110.0)));
        assert!(q3.is_correct(&QuizAnswer::Numeric(110.99)));
        assert!(!q3.is_correct(&QuizAnswer::Numeric(111.0)));
        assert!(!q3.is_correct(&QuizAnswer::Numeric(109.0)));

        let q5 = Question::get(5).unwrap();
        assert!(q5.is_correct(&QuizAnswer::Numeric(1.4)));
        assert!(!q5.is_correct(&QuizAnswer::Numeric(1.5)));
    }

    #[test]
    fn test_numeric_keys_match_worked_answers() {
        let expected = |n: u8| match Question::get(n).unwrap().key {
            AnswerKey::Numeric { expected, .. } => expected,
            AnswerKey::Choice { .. } => panic!("question {} is not numeric", n),
        };
        // spot 100 carried one year at 10%
        assert_relative_eq!(expected(3), 100.0 * 1.10, epsilon = 1e-9);
        // 200 -> 210, size 50
        assert_relative_eq!(expected(4), (210.0 - 200.0) * 50.0);
        // short 500 -> 520, size 10
        assert_relative_eq!(expected(10), (520.0 - 500.0) * 10.0);
    }

    #[test]
    fn test_parse_numeric_answer_value() {
        let q5 = Question::get(5).unwrap();
        match q5.parse_answer(" 0.75 ").unwrap() {
            QuizAnswer::Numeric(v) => assert_relative_eq!(v, 0.75),
            other => panic!("unexpected answer {:?}", other),
        }
    }

    #[test]
    fn test_choice_accept_canonicalises() {
        let q1 = Question::get(1).unwrap();
        let answer = q1.accept(QuizAnswer::Choice(" short".into())).unwrap();
        assert_eq!(answer, QuizAnswer::Choice("Short".into()));
        assert!(q1.is_correct(&answer));
    }

    #[test]
    fn test_accept_rejects_unknown_option() {
        let q8 = Question::get(8).unwrap();
        let err = q8.accept(QuizAnswer::Choice("Medium".into())).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidAnswer {
                question: 8,
                reason: "expected one of: High, Low".to_string()
            }
        );
    }

    #[test]
    fn test_accept_rejects_wrong_kind() {
        let q4 = Question::get(4).unwrap();
        assert!(q4.parse_answer("five hundred").is_err());
        assert!(q4.accept(QuizAnswer::Numeric(f64::NAN)).is_err());

        let q2 = Question::get(2).unwrap();
        assert!(q2.accept(QuizAnswer::Numeric(0.0)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Question::get(2).unwrap().to_string(), "2. Basis at expiry?");
    }
}
