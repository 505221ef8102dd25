//! Studyforge Domain Layer
//!
//! This crate contains the core data model for Studyforge: the four study
//! artifacts produced from LLM-generated text, the reduction statistics
//! attached to Cornell notes, and the trait boundary to completion
//! providers.
//!
//! ## Key Concepts
//!
//! - **Artifact**: a typed study aid derived from raw generated text
//!   (Cornell notes, quiz, flashcard deck, mindmap outline)
//! - **Completion boundary**: providers are black boxes that turn a prompt
//!   into raw text; everything past that boundary is parsing
//! - **Derived values**: artifacts are recomputed in full from each raw
//!   response and never mutated incrementally
//!
//! ## Architecture
//!
//! - Value types and trait definitions only, no I/O
//! - Extraction logic lives in `studyforge-extract`
//! - Provider implementations live in `studyforge-llm`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod completion;
pub mod cornell;
pub mod flashcard;
pub mod outline;
pub mod quiz;
pub mod stats;
pub mod traits;

// Re-exports for convenience
pub use completion::CompletionRequest;
pub use cornell::{CornellDocument, NoteKind, NoteLine};
pub use flashcard::{Flashcard, FlashcardDeck};
pub use outline::{Outline, OutlineNode};
pub use quiz::{GradeReport, Question, Quiz, QuizOption};
pub use stats::NoteStats;
