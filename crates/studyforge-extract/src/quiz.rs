//! Parse generated text into a multiple-choice quiz
//!
//! Question blocks are separated by blank lines. Within a block, the first
//! non-empty line is the question, the last must declare the correct
//! answer, and everything between is an option. A block whose last line
//! does not match the answer pattern is dropped silently — lossy recovery,
//! not an error.

use once_cell::sync::Lazy;
use regex::Regex;
use studyforge_domain::{Question, Quiz, QuizOption};
use tracing::warn;

static ANSWER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Correct answer:\s*([A-D])").expect("valid answer pattern"));

/// Parse generated text into a [`Quiz`].
///
/// Never fails on malformed blocks; each is dropped and parsing continues.
/// Zero valid blocks yields an empty quiz.
pub fn extract(text: &str) -> Quiz {
    let mut questions = Vec::new();

    for block in text.split("\n\n") {
        let lines: Vec<&str> = block.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.is_empty() {
            continue;
        }

        let question_text = lines[0];
        let answer_line = lines[lines.len() - 1];

        let correct = match ANSWER_RE.captures(answer_line) {
            Some(caps) => caps[1]
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('A'),
            None => {
                warn!("Dropping question block without answer line: {:?}", question_text);
                continue;
            }
        };

        // Options are assumed pre-labeled ("A.", "B.", ...) per the prompt
        // contract; the label letter is the line's first character.
        let options = lines[1..lines.len() - 1]
            .iter()
            .map(|line| QuizOption {
                letter: line
                    .chars()
                    .next()
                    .map(|c| c.to_ascii_uppercase())
                    .unwrap_or('A'),
                text: line.to_string(),
            })
            .collect();

        questions.push(Question {
            text: question_text.to_string(),
            options,
            correct,
        });
    }

    Quiz { questions }
}
