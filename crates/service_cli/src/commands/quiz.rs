//! Quiz command implementation
//!
//! Grades a quiz sheet and, for a passing score and a given name, writes
//! the completion certificate.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use lab_quiz::{
    Certificate, CertificateRenderer, QuizResult, QuizSheet, SvgCertificate, QUESTIONS,
    QUESTION_COUNT,
};
use tracing::info;

use crate::{CliError, Result};

/// Parses an `N=answer` quiz response.
pub fn parse_answer(raw: &str) -> std::result::Result<(u8, String), String> {
    let (number, answer) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected N=answer, got '{}'", raw))?;
    let number: u8 = number
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a question number", number.trim()))?;
    Ok((number, answer.to_string()))
}

/// Records answers on a fresh sheet and grades it.
pub fn grade(answers: &[(u8, String)]) -> Result<QuizResult> {
    let mut sheet = QuizSheet::new();
    for (question, answer) in answers {
        sheet.answer_text(*question, answer)?;
    }
    Ok(sheet.submit())
}

/// Run the quiz command
pub fn run(
    answers: &[(u8, String)],
    name: Option<&str>,
    output_dir: &Path,
    instructor: &str,
    today: NaiveDate,
) -> Result<()> {
    let result = grade(answers)?;
    print!("{}", summary(&result));

    match name {
        Some(name) => {
            let certificate = Certificate::for_result(name, &result, today, instructor)?;
            let path = write_certificate(&certificate, &SvgCertificate, output_dir)?;
            println!("Certificate written to {}", path.display());
        }
        None if result.passed() => {
            println!("Passed. Re-run with --name to receive a certificate.");
        }
        None => {}
    }
    Ok(())
}

fn summary(result: &QuizResult) -> String {
    let mut out = String::new();
    for (question, outcome) in QUESTIONS.iter().zip(result.outcomes()) {
        let mark = if outcome.correct { "✓" } else { "✗" };
        let answer = outcome
            .answer
            .as_ref()
            .map(|a| a.to_string())
            .unwrap_or_else(|| "(unanswered)".to_string());
        out.push_str(&format!("{} {}  {}\n", mark, question, answer));
    }
    out.push_str(&format!("\nScore {}/{}\n", result.score(), QUESTION_COUNT));
    out
}

/// Renders `certificate` and writes it under `output_dir`.
pub fn write_certificate(
    certificate: &Certificate,
    renderer: &dyn CertificateRenderer,
    output_dir: &Path,
) -> Result<PathBuf> {
    let bytes = renderer.render(certificate)?;

    fs::create_dir_all(output_dir).map_err(|source| CliError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = output_dir.join(renderer.format().file_name());
    fs::write(&path, &bytes).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;

    info!(
        path = %path.display(),
        score = certificate.score(),
        size = bytes.len(),
        "Certificate written to file"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(u8, &str)]) -> Vec<(u8, String)> {
        pairs.iter().map(|(q, a)| (*q, a.to_string())).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("9=Close & reopen").unwrap(), (9, "Close & reopen".into()));
        assert!(parse_answer("Short").is_err());
        assert!(parse_answer("one=Short").is_err());
    }

    #[test]
    fn test_grade_and_summary() {
        let result = grade(&answers(&[(1, "short"), (3, "110")])).unwrap();
        assert_eq!(result.score(), 2);
        let text = summary(&result);
        assert!(text.contains("✓ 1. Market falls → who gains?  Short"));
        assert!(text.contains("✗ 2. Basis at expiry?  (unanswered)"));
        assert!(text.ends_with("Score 2/10\n"));
    }

    #[test]
    fn test_invalid_answer_is_rejected() {
        let err = grade(&answers(&[(8, "Medium")])).unwrap_err();
        assert!(matches!(err, CliError::Quiz(_)));
    }

    #[test]
    fn test_failing_score_withholds_certificate() {
        let dir = std::env::temp_dir().join("futures-lab-quiz-fail");
        let err = run(
            &answers(&[(1, "Short")]),
            Some("Asha"),
            &dir,
            lab_quiz::DEFAULT_INSTRUCTOR,
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Lab(_)));
        assert!(!dir.join("certificate.svg").exists());
    }

    #[test]
    fn test_passing_score_writes_certificate() {
        let dir = std::env::temp_dir().join(format!("futures-lab-quiz-{}", std::process::id()));
        let pass = answers(&[
            (1, "Short"),
            (2, "Zero"),
            (3, "110"),
            (4, "500"),
            (5, "1"),
            (6, "Credit risk"),
            (7, "Contango"),
            (8, "High"),
        ]);
        run(&pass, Some("Asha"), &dir, "Dr. Meera Iyer", today()).unwrap();

        let svg = fs::read_to_string(dir.join("certificate.svg")).unwrap();
        assert!(svg.contains("Asha"));
        assert!(svg.contains("Score: 8/10"));
        assert!(svg.contains("19 October 2026"));
        assert!(svg.contains("Instructor: Dr. Meera Iyer"));
        fs::remove_dir_all(&dir).ok();
    }
}
