//! Multiple-choice quiz artifact

use serde::{Deserialize, Serialize};

/// One labeled answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// Option letter, always uppercase A-D
    pub letter: char,

    /// Full option line as generated (label included)
    pub text: String,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text (first line of the source block)
    pub text: String,

    /// Answer options in source order
    pub options: Vec<QuizOption>,

    /// Correct option letter, always uppercase A-D
    pub correct: char,
}

impl Question {
    /// Check a chosen letter against the correct answer, case-insensitively.
    pub fn is_correct(&self, chosen: char) -> bool {
        chosen.to_ascii_uppercase() == self.correct
    }
}

/// An ordered set of multiple-choice questions.
///
/// Correct answers are part of the returned value; callers thread them
/// through their own state rather than relying on anything ambient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Questions in source order
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True when no valid question block was recovered.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The correct letters in question order.
    pub fn answer_key(&self) -> Vec<char> {
        self.questions.iter().map(|q| q.correct).collect()
    }

    /// Grade a set of chosen letters against this quiz.
    ///
    /// `answers[i]` is the letter chosen for question `i`; `None` means the
    /// question was left unanswered and counts as wrong. Extra answers
    /// beyond the question count are ignored.
    pub fn grade(&self, answers: &[Option<char>]) -> GradeReport {
        let results = self
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let chosen = answers.get(i).copied().flatten();
                AnswerResult {
                    chosen,
                    correct: q.correct,
                    is_correct: chosen.map(|c| q.is_correct(c)).unwrap_or(false),
                }
            })
            .collect::<Vec<_>>();

        let score = results.iter().filter(|r| r.is_correct).count();
        GradeReport { results, score }
    }
}

/// Outcome of grading one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Letter the user chose, if any
    pub chosen: Option<char>,

    /// The correct letter
    pub correct: char,

    /// Whether the chosen letter matched
    pub is_correct: bool,
}

/// Result of grading a full quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReport {
    /// Per-question outcomes in question order
    pub results: Vec<AnswerResult>,

    /// Number of correct answers
    pub score: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Quiz {
        Quiz {
            questions: vec![
                Question {
                    text: "Question 1: Capital of France?".to_string(),
                    options: vec![
                        QuizOption {
                            letter: 'A',
                            text: "A. Paris".to_string(),
                        },
                        QuizOption {
                            letter: 'B',
                            text: "B. Lyon".to_string(),
                        },
                    ],
                    correct: 'A',
                },
                Question {
                    text: "Question 2: 2 + 2?".to_string(),
                    options: vec![],
                    correct: 'C',
                },
            ],
        }
    }

    #[test]
    fn test_answer_key_order() {
        assert_eq!(sample_quiz().answer_key(), vec!['A', 'C']);
    }

    #[test]
    fn test_is_correct_case_insensitive() {
        let quiz = sample_quiz();
        assert!(quiz.questions[0].is_correct('a'));
        assert!(quiz.questions[0].is_correct('A'));
        assert!(!quiz.questions[0].is_correct('b'));
    }

    #[test]
    fn test_grade_counts_unanswered_as_wrong() {
        let quiz = sample_quiz();
        let report = quiz.grade(&[Some('a'), None]);

        assert_eq!(report.score, 1);
        assert!(report.results[0].is_correct);
        assert!(!report.results[1].is_correct);
        assert_eq!(report.results[1].chosen, None);
    }

    #[test]
    fn test_grade_ignores_extra_answers() {
        let quiz = sample_quiz();
        let report = quiz.grade(&[Some('A'), Some('C'), Some('D')]);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.score, 2);
    }
}
