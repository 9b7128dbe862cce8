//! Quiz sheet and grading.
//!
//! A [`QuizSheet`] is the unsubmitted state: answers may be recorded or
//! replaced. [`QuizSheet::submit`] consumes the sheet and returns the
//! terminal [`QuizResult`]; retrying needs a fresh sheet.

use tracing::{debug, info};

use crate::error::QuizError;
use crate::question::{Question, QuizAnswer, PASS_MARK, QUESTIONS, QUESTION_COUNT};

/// Answers collected before submission.
///
/// # Examples
/// ```
/// use lab_quiz::{QuizAnswer, QuizSheet};
///
/// let mut sheet = QuizSheet::new();
/// sheet.answer(1, QuizAnswer::Choice("Short".into())).unwrap();
/// sheet.answer_text(3, "110").unwrap();
///
/// let result = sheet.submit();
/// assert_eq!(result.score(), 2);
/// assert!(!result.passed());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizSheet {
    answers: [Option<QuizAnswer>; QUESTION_COUNT as usize],
}

impl QuizSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or replaces the answer to `question`.
    pub fn answer(&mut self, question: u8, answer: QuizAnswer) -> Result<(), QuizError> {
        let q = Question::get(question)?;
        let accepted = q.accept(answer)?;
        debug!(question, answer = %accepted, "Answer recorded");
        self.answers[usize::from(question - 1)] = Some(accepted);
        Ok(())
    }

    /// Records an answer given as collector text.
    pub fn answer_text(&mut self, question: u8, raw: &str) -> Result<(), QuizError> {
        let answer = Question::get(question)?.parse_answer(raw)?;
        self.answer(question, answer)
    }

    /// Recorded answer to `question`, if any.
    pub fn get(&self, question: u8) -> Option<&QuizAnswer> {
        question
            .checked_sub(1)
            .and_then(|i| self.answers.get(usize::from(i)))
            .and_then(Option::as_ref)
    }

    /// Number of questions answered so far.
    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Grades the sheet. Unanswered questions count as wrong.
    pub fn submit(self) -> QuizResult {
        let outcomes: Vec<QuestionOutcome> = QUESTIONS
            .iter()
            .zip(self.answers)
            .map(|(q, answer)| QuestionOutcome {
                question: q.number,
                correct: answer.as_ref().is_some_and(|a| q.is_correct(a)),
                answer,
            })
            .collect();
        let score = outcomes.iter().filter(|o| o.correct).count() as u8;

        info!(score, passed = score >= PASS_MARK, "Quiz graded");
        QuizResult { score, outcomes }
    }
}

/// Grading of a single question.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionOutcome {
    /// Question number
    pub question: u8,
    /// Answer given, if any
    pub answer: Option<QuizAnswer>,
    /// Whether the answer was correct
    pub correct: bool,
}

/// Graded quiz.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuizResult {
    score: u8,
    outcomes: Vec<QuestionOutcome>,
}

impl QuizResult {
    /// Number of correct answers, 0 to 10.
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Returns whether the score reaches the pass mark.
    pub fn passed(&self) -> bool {
        self.score >= PASS_MARK
    }

    /// Per-question outcomes in sheet order.
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }
}
