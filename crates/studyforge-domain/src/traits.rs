//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::CompletionRequest;

/// Trait for completion provider operations
///
/// Implemented by the infrastructure layer (studyforge-llm). The trait is
/// synchronous; async providers wrap themselves and callers that need
/// concurrency run `complete` on a blocking task.
pub trait CompletionProvider {
    /// Error type for provider operations
    type Error: std::fmt::Display;

    /// Send a completion request and return the raw generated text
    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;

    /// Name of the model this provider targets
    fn model(&self) -> &str;
}
