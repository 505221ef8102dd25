//! Studyforge Extraction Layer
//!
//! Converts raw LLM-generated text into typed study artifacts.
//!
//! # Overview
//!
//! Generated text is not guaranteed to follow the requested format: section
//! markers go missing, blank lines multiply, bullet markers drift. Each
//! extractor in this crate is a total function over its input — malformed
//! segments are dropped with a warning and extraction continues. A result
//! with zero items is a legitimate, renderable empty state, not a failure.
//!
//! # Architecture
//!
//! ```text
//! Context → PromptBuilder → CompletionProvider → raw text → extractor → artifact
//! ```
//!
//! The [`Generator`] ties the pipeline together: it validates input, builds
//! the prompt, calls the provider under a timeout, and runs the matching
//! extractor over the response.
//!
//! # Example Usage
//!
//! ```no_run
//! use studyforge_extract::{Generator, GeneratorConfig, NotesRequest};
//! use studyforge_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new("Cues:\n- key idea\nSummary:\nShort.");
//! let generator = Generator::new(provider, GeneratorConfig::default());
//!
//! let output = generator.notes(NotesRequest::new("source text")).await?;
//! println!("cues: {}", output.document.cues.len());
//! println!("reduced words: {}", output.stats.reduced_words);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod types;

pub mod cornell;
pub mod flashcard;
pub mod outline;
pub mod prompt;
pub mod quiz;
pub mod stats;


pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use generator::Generator;
pub use prompt::{Difficulty, NoteLength, Tonality, Tone};
pub use types::{
    FlashcardOutput, FlashcardRequest, GenerationMetadata, MindmapOutput, MindmapRequest,
    NotesOutput, NotesRequest, QuizOutput, QuizRequest,
};
