//! Request and output types for generation

use crate::prompt::{Difficulty, NoteLength, Tonality, Tone};
use serde::{Deserialize, Serialize};
use studyforge_domain::{CornellDocument, FlashcardDeck, NoteStats, Outline, Quiz};

/// Request to generate Cornell notes
#[derive(Debug, Clone)]
pub struct NotesRequest {
    /// Source text to take notes on
    pub context: String,

    /// Writing tone
    pub tone: Tone,

    /// Target length
    pub length: NoteLength,
}

impl NotesRequest {
    /// Create a request with default tone and length.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            tone: Tone::default(),
            length: NoteLength::default(),
        }
    }
}

/// Request to generate a multiple-choice quiz
#[derive(Debug, Clone)]
pub struct QuizRequest {
    /// Source text to quiz on
    pub context: String,

    /// Number of questions to request
    pub questions: u8,

    /// Question difficulty
    pub difficulty: Difficulty,

    /// Question tonality
    pub tonality: Tonality,
}

impl QuizRequest {
    /// Create a request for `questions` questions with default knobs.
    pub fn new(context: impl Into<String>, questions: u8) -> Self {
        Self {
            context: context.into(),
            questions,
            difficulty: Difficulty::default(),
            tonality: Tonality::default(),
        }
    }
}

/// Request to generate flashcards
#[derive(Debug, Clone)]
pub struct FlashcardRequest {
    /// Source text to make cards from
    pub context: String,

    /// Number of cards to request
    pub cards: u8,

    /// Card difficulty
    pub difficulty: Difficulty,

    /// Card tonality
    pub tonality: Tonality,
}

impl FlashcardRequest {
    /// Create a request for `cards` cards with default knobs.
    pub fn new(context: impl Into<String>, cards: u8) -> Self {
        Self {
            context: context.into(),
            cards,
            difficulty: Difficulty::default(),
            tonality: Tonality::default(),
        }
    }
}

/// Request to generate a mindmap outline
#[derive(Debug, Clone)]
pub struct MindmapRequest {
    /// Source text to map
    pub context: String,
}

impl MindmapRequest {
    /// Create a request.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

/// Metadata about one generation call
///
/// `request_id` increases monotonically per Generator, so callers that
/// overlap requests can discard responses that arrive out of order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    /// Monotonic id of this request
    pub request_id: u64,

    /// Name of the model used
    pub model: String,

    /// Length of the raw response in characters
    pub response_chars: usize,

    /// Processing time in milliseconds
    pub elapsed_ms: u64,
}

/// Result of the notes flow
#[derive(Debug, Clone)]
pub struct NotesOutput {
    /// Extracted Cornell document
    pub document: CornellDocument,

    /// Reduction statistics against the source context
    pub stats: NoteStats,

    /// Generation metadata
    pub metadata: GenerationMetadata,
}

/// Result of the quiz flow
#[derive(Debug, Clone)]
pub struct QuizOutput {
    /// Extracted quiz
    pub quiz: Quiz,

    /// Generation metadata
    pub metadata: GenerationMetadata,
}

/// Result of the flashcard flow
#[derive(Debug, Clone)]
pub struct FlashcardOutput {
    /// Extracted deck
    pub deck: FlashcardDeck,

    /// Generation metadata
    pub metadata: GenerationMetadata,
}

/// Result of the mindmap flow
#[derive(Debug, Clone)]
pub struct MindmapOutput {
    /// Extracted outline
    pub outline: Outline,

    /// Generation metadata
    pub metadata: GenerationMetadata,
}
