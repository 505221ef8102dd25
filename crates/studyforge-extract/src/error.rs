//! Error types for the generation pipeline

use thiserror::Error;

/// Errors that can occur while generating a study artifact.
///
/// Extraction itself never fails; these errors cover local validation,
/// the provider boundary, and configuration. Validation errors are raised
/// before any network call is made.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Context is empty after trimming; caught before any provider call
    #[error("Context is missing. Please provide the source text.")]
    EmptyContext,

    /// Context exceeds the configured maximum length
    #[error("Context too long: {0} chars (max: {1})")]
    ContextTooLong(usize, usize),

    /// The provider call did not finish within the configured timeout
    #[error("Generation timed out")]
    Timeout,

    /// Completion provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
