//! Prompt engineering for study-artifact generation
//!
//! One builder per artifact. Each prompt embeds the user's context, the
//! chosen style knobs, and a format contract the matching extractor parses
//! on the other end.

use serde::{Deserialize, Serialize};

/// Writing tone for generated notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Neutral and professional
    #[default]
    Standard,
    /// Casual and friendly
    Friendly,
    /// Formal and academic
    Formal,
}

impl Tone {
    fn instruction(self) -> &'static str {
        match self {
            Tone::Standard => "Use a neutral and professional tone.",
            Tone::Friendly => "Use a casual and friendly tone.",
            Tone::Formal => "Use a formal and academic tone.",
        }
    }
}

/// Target length for generated notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteLength {
    /// Concise and brief
    Short,
    /// Detailed
    #[default]
    Normal,
    /// Extended and comprehensive
    Long,
}

impl NoteLength {
    fn instruction(self) -> &'static str {
        match self {
            NoteLength::Short => "Provide concise and brief notes.",
            NoteLength::Normal => "Provide detailed notes.",
            NoteLength::Long => "Provide extended and comprehensive notes.",
        }
    }
}

/// Difficulty for quizzes and flashcards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Simple and straightforward
    Easy,
    /// Moderate difficulty
    #[default]
    Normal,
    /// Challenging and thought-provoking
    Hard,
}

impl Difficulty {
    fn instruction(self) -> &'static str {
        match self {
            Difficulty::Easy => "simple and straightforward",
            Difficulty::Normal => "of moderate difficulty",
            Difficulty::Hard => "challenging and thought-provoking",
        }
    }
}

/// Tonality for quizzes and flashcards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tonality {
    /// Casual and friendly
    Casual,
    /// Neutral and professional
    #[default]
    Standard,
    /// Formal and academic
    Academic,
}

impl Tonality {
    fn instruction(self) -> &'static str {
        match self {
            Tonality::Casual => "casual and friendly tone",
            Tonality::Standard => "neutral and professional tone",
            Tonality::Academic => "formal and academic tone",
        }
    }
}

/// System instruction for the notes flow.
pub const NOTES_SYSTEM: &str =
    "You are an AI assistant that generates notes based on the given context.";

/// System instruction for the quiz flow.
pub const QUIZ_SYSTEM: &str =
    "You are an AI assistant that generates multiple choice questions based on the given context.";

/// System instruction for the flashcard flow.
pub const FLASHCARD_SYSTEM: &str =
    "You are an AI assistant that generates flashcards based on the given context.";

/// System instruction for the mindmap flow.
pub const OUTLINE_SYSTEM: &str =
    "You are an AI assistant that generates mindmap outlines based on the given context.";

const NOTES_FORMAT: &str = r#"Please format the response as follows:

- USE ONLY SIMPLE ENGLISH WORDS AND BULLET POINTS
- Please don't include analogies in your notes

Cues:
- [Bullet points for key topics or questions]

Notes:
- [Main topic 1]:
  - [Subtopic 1 in details]
  - [Subtopic 2 in details]
- [Main topic 2]:
  - [Subtopic 1 in details]
  - [Subtopic 2 in details]
- [Must include simplified notes of all the key-details in the original context]

Summary:
[A concise summary of the main points]"#;

/// Builds the Cornell-notes prompt.
pub struct NotesPromptBuilder {
    context: String,
    tone: Tone,
    length: NoteLength,
}

impl NotesPromptBuilder {
    /// Create a builder with default tone and length.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            tone: Tone::default(),
            length: NoteLength::default(),
        }
    }

    /// Set the writing tone.
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Set the target length.
    pub fn with_length(mut self, length: NoteLength) -> Self {
        self.length = length;
        self
    }

    /// Build the complete prompt.
    pub fn build(&self) -> String {
        format!(
            "{}\n\nTone: {}\nLength: {}\n\n{}",
            self.context,
            self.tone.instruction(),
            self.length.instruction(),
            NOTES_FORMAT
        )
    }
}

/// Builds the multiple-choice quiz prompt.
pub struct QuizPromptBuilder {
    context: String,
    questions: u8,
    difficulty: Difficulty,
    tonality: Tonality,
}

impl QuizPromptBuilder {
    /// Create a builder for `questions` questions with default knobs.
    pub fn new(context: impl Into<String>, questions: u8) -> Self {
        Self {
            context: context.into(),
            questions,
            difficulty: Difficulty::default(),
            tonality: Tonality::default(),
        }
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the tonality.
    pub fn with_tonality(mut self, tonality: Tonality) -> Self {
        self.tonality = tonality;
        self
    }

    /// Build the complete prompt.
    pub fn build(&self) -> String {
        format!(
            "{}\n\nGenerate {} multiple choice questions based on the given context. \
The questions should be {} and have a {}. \
Each question should have exactly 4 options labeled A, B, C, and D, with one correct answer. \
Format the output as follows:\n\
Question 1: [Question text]\n\
A. [Option 1]\n\
B. [Option 2]\n\
C. [Option 3]\n\
D. [Option 4]\n\
Correct answer: [Correct option letter]\n\
Repeat this format for all questions, separating questions with a blank line.",
            self.context,
            self.questions,
            self.difficulty.instruction(),
            self.tonality.instruction()
        )
    }
}

/// Builds the flashcard prompt.
pub struct FlashcardPromptBuilder {
    context: String,
    cards: u8,
    difficulty: Difficulty,
    tonality: Tonality,
}

impl FlashcardPromptBuilder {
    /// Create a builder for `cards` cards with default knobs.
    pub fn new(context: impl Into<String>, cards: u8) -> Self {
        Self {
            context: context.into(),
            cards,
            difficulty: Difficulty::default(),
            tonality: Tonality::default(),
        }
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the tonality.
    pub fn with_tonality(mut self, tonality: Tonality) -> Self {
        self.tonality = tonality;
        self
    }

    /// Build the complete prompt.
    pub fn build(&self) -> String {
        format!(
            "{}\n\nGenerate {} flashcards based on the provided context. \
The flashcards should be {} and have a {}. \
Format the output as follows, separating cards with a blank line:\n\n\
Front: [Question text]\n\
Back: [Answer text (the key point of the question, main points only, concise)]",
            self.context,
            self.cards,
            self.difficulty.instruction(),
            self.tonality.instruction()
        )
    }
}

/// Builds the mindmap outline prompt.
pub struct OutlinePromptBuilder {
    context: String,
}

impl OutlinePromptBuilder {
    /// Create a builder.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }

    /// Build the complete prompt.
    pub fn build(&self) -> String {
        format!(
            "Based on the following context, generate a mindmap outline with keywords \
and their relationships. Use a hierarchical structure with main keywords and subkeywords. \
Format the response as an indented list, where the indentation level represents the \
hierarchy (2 spaces per level). Use the following format:\n\n\
- Main Keyword 1\n\
\x20 - Subkeyword 1\n\
\x20 - Subkeyword 2\n\
- Main Keyword 2\n\
\x20 - Subkeyword 1\n\
\x20 - Subkeyword 2\n\n\
Context:\n{}\n\nMindmap Outline:",
            self.context
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_prompt_includes_context_and_knobs() {
        let prompt = NotesPromptBuilder::new("The water cycle")
            .with_tone(Tone::Friendly)
            .with_length(NoteLength::Short)
            .build();

        assert!(prompt.contains("The water cycle"));
        assert!(prompt.contains("casual and friendly"));
        assert!(prompt.contains("concise and brief"));
    }

    #[test]
    fn test_notes_prompt_includes_format_contract() {
        let prompt = NotesPromptBuilder::new("x").build();
        assert!(prompt.contains("Cues:"));
        assert!(prompt.contains("Notes:"));
        assert!(prompt.contains("Summary:"));
    }

    #[test]
    fn test_quiz_prompt_contract() {
        let prompt = QuizPromptBuilder::new("Roman history", 5)
            .with_difficulty(Difficulty::Hard)
            .with_tonality(Tonality::Academic)
            .build();

        assert!(prompt.contains("Roman history"));
        assert!(prompt.contains("Generate 5 multiple choice questions"));
        assert!(prompt.contains("challenging and thought-provoking"));
        assert!(prompt.contains("Correct answer: [Correct option letter]"));
    }

    #[test]
    fn test_flashcard_prompt_contract() {
        let prompt = FlashcardPromptBuilder::new("Cell biology", 10).build();

        assert!(prompt.contains("Cell biology"));
        assert!(prompt.contains("Generate 10 flashcards"));
        assert!(prompt.contains("Front: [Question text]"));
        assert!(prompt.contains("Back:"));
    }

    #[test]
    fn test_outline_prompt_contract() {
        let prompt = OutlinePromptBuilder::new("Solar system").build();

        assert!(prompt.contains("Solar system"));
        assert!(prompt.contains("- Main Keyword 1"));
        assert!(prompt.contains("Mindmap Outline:"));
        // Subkeyword sample lines are indented by two spaces
        assert!(prompt.contains("\n  - Subkeyword 1"));
    }

    #[test]
    fn test_default_knobs() {
        assert_eq!(Tone::default(), Tone::Standard);
        assert_eq!(NoteLength::default(), NoteLength::Normal);
        assert_eq!(Difficulty::default(), Difficulty::Normal);
        assert_eq!(Tonality::default(), Tonality::Standard);
    }
}
