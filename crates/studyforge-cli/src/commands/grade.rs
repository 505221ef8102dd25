//! Grade command implementation.
//!
//! Reads a quiz saved with `quiz --format json`, checks a set of chosen
//! letters against it, and reports the score. Correct answers travel with
//! the quiz itself, so grading works on the saved file alone.

use crate::cli::GradeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use studyforge_domain::Quiz;

/// Execute the grade command.
pub fn execute_grade(args: GradeArgs, formatter: &Formatter) -> Result<()> {
    let contents = std::fs::read_to_string(&args.quiz).map_err(|e| {
        CliError::InvalidInput(format!("Could not read {}: {}", args.quiz.display(), e))
    })?;
    let quiz = parse_quiz(&contents)?;
    let answers = parse_answers(&args.answers)?;

    if answers.len() != quiz.len() {
        return Err(CliError::InvalidInput(format!(
            "Got {} answers for {} questions",
            answers.len(),
            quiz.len()
        )));
    }

    let report = quiz.grade(&answers);
    println!("{}", formatter.format_grade(&report)?);

    Ok(())
}

/// Accept either a bare serialized quiz or the full quiz-command output
/// that wraps it under a `quiz` key.
fn parse_quiz(contents: &str) -> Result<Quiz> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    let quiz_value = value.get("quiz").cloned().unwrap_or(value);
    Ok(serde_json::from_value(quiz_value)?)
}

/// Parse comma-separated chosen letters. `-` or an empty slot marks a
/// skipped question.
fn parse_answers(answers: &str) -> Result<Vec<Option<char>>> {
    answers
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            if entry.is_empty() || entry == "-" {
                return Ok(None);
            }

            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Ok(Some(c)),
                _ => Err(CliError::InvalidInput(format!(
                    "Invalid answer '{}'. Expected a single letter or '-'",
                    entry
                ))),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAVED_QUIZ: &str = r#"{
        "quiz": {
            "questions": [
                {
                    "text": "Question 1: What heats surface water?",
                    "options": [
                        {"letter": "A", "text": "A. The moon"},
                        {"letter": "B", "text": "B. The sun"}
                    ],
                    "correct": "B"
                },
                {
                    "text": "Question 2: What do clouds form from?",
                    "options": [
                        {"letter": "A", "text": "A. Dust"},
                        {"letter": "B", "text": "B. Vapor"}
                    ],
                    "correct": "B"
                }
            ]
        },
        "metadata": {"request_id": 1, "model": "mock", "response_chars": 10, "elapsed_ms": 5}
    }"#;

    #[test]
    fn test_parse_answers() {
        let answers = parse_answers("A, b,-,").unwrap();
        assert_eq!(answers, vec![Some('A'), Some('b'), None, None]);
    }

    #[test]
    fn test_parse_answers_rejects_words() {
        assert!(matches!(
            parse_answers("A,yes"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_quiz_accepts_wrapped_and_bare() {
        let wrapped = parse_quiz(SAVED_QUIZ).unwrap();
        assert_eq!(wrapped.len(), 2);

        let bare = parse_quiz(r#"{"questions": []}"#).unwrap();
        assert!(bare.is_empty());
    }

    #[test]
    fn test_execute_grade_from_saved_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAVED_QUIZ).unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = GradeArgs {
            quiz: file.path().to_path_buf(),
            answers: "b,A".to_string(),
        };

        assert!(execute_grade(args, &formatter).is_ok());
    }

    #[test]
    fn test_answer_count_mismatch_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAVED_QUIZ).unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = GradeArgs {
            quiz: file.path().to_path_buf(),
            answers: "A".to_string(),
        };

        assert!(matches!(
            execute_grade(args, &formatter),
            Err(CliError::InvalidInput(_))
        ));
    }
}
