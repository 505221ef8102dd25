//! Studyforge Provider Layer
//!
//! Pluggable completion provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `CompletionProvider` trait
//! from `studyforge-domain`. Providers turn a `CompletionRequest` into raw
//! generated text; everything downstream of that is extraction.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat-completions API integration
//!
//! # Examples
//!
//! ```
//! use studyforge_llm::MockProvider;
//! use studyforge_domain::CompletionRequest;
//! use studyforge_domain::traits::CompletionProvider;
//!
//! let provider = MockProvider::new("Hello from the model!");
//! let request = CompletionRequest::new("system", "test prompt");
//! let result = provider.complete(&request).unwrap();
//! assert_eq!(result, "Hello from the model!");
//! ```

#![warn(missing_docs)]

pub mod openai;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use studyforge_domain::traits::CompletionProvider;
use studyforge_domain::CompletionRequest;
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur at the completion boundary
///
/// The variants mirror the three user-facing failure categories: no
/// response received, a failure status received, and a local problem caught
/// before any request is made. `InvalidResponse` covers 2xx payloads that
/// cannot be used.
#[derive(Error, Debug)]
pub enum LlmError {
    /// No response received (network failure, DNS, timeout)
    #[error("No response from the server: {0}. Check your connection and try again.")]
    Connectivity(String),

    /// Response received with a failure status
    #[error("Server error (HTTP {status}). Please try again later.")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, kept for diagnostic logging
        body: String,
    },

    /// Response received but the payload could not be used
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No API credential configured; caught before any request is made
    #[error("API key is missing. Provide one before generating.")]
    MissingCredential,

    /// Generic error
    #[error("Provider error: {0}")]
    Other(String),
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses can be keyed on a substring of the prompt, which keeps tests
/// independent of exact prompt wording.
///
/// # Examples
///
/// ```
/// use studyforge_llm::MockProvider;
/// use studyforge_domain::CompletionRequest;
/// use studyforge_domain::traits::CompletionProvider;
///
/// let mut provider = MockProvider::new("default");
/// provider.add_response("photosynthesis", "Cues:\n- light");
///
/// let request = CompletionRequest::new("sys", "explain photosynthesis");
/// assert_eq!(provider.complete(&request).unwrap(), "Cues:\n- light");
///
/// let request = CompletionRequest::new("sys", "anything else");
/// assert_eq!(provider.complete(&request).unwrap(), "default");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a response returned when the prompt contains `fragment`
    pub fn add_response(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(fragment.into(), response.into());
    }

    /// Configure an error for prompts containing `fragment`
    pub fn add_error(&mut self, fragment: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(fragment.into(), "ERROR".to_string());
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        for (fragment, response) in responses.iter() {
            if request.prompt.contains(fragment.as_str()) {
                if response == "ERROR" {
                    return Err(LlmError::Other("Mock error".to_string()));
                }
                return Ok(response.clone());
            }
        }

        Ok(self.default_response.clone())
    }

    fn model(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest::new("system", prompt)
    }

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.complete(&request("any prompt"));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_fragment_match() {
        let mut provider = MockProvider::default();
        provider.add_response("flashcards", "Front: Q\nBack: A");

        let result = provider.complete(&request("make flashcards please"));
        assert_eq!(result.unwrap(), "Front: Q\nBack: A");

        let result = provider.complete(&request("unrelated"));
        assert_eq!(result.unwrap(), "Default mock response");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.complete(&request("one")).unwrap();
        provider.complete(&request("two")).unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.complete(&request("this is a bad prompt"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[test]
    fn test_mock_provider_clone_shares_count() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.complete(&request("test")).unwrap();

        // Both share the same call count through the Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
