//! Completion-boundary request type

use serde::{Deserialize, Serialize};

/// A request to a completion provider.
///
/// The provider is a black box: it receives a system instruction, a user
/// prompt, and sampling parameters, and returns a single raw text payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// System instruction establishing the assistant's role
    pub system: String,

    /// User-constructed prompt (context plus format contract)
    pub prompt: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum output length in tokens
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Create a request with the default sampling parameters used by every
    /// generation flow (temperature 0.7, 4000 output tokens).
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            temperature: 0.7,
            max_tokens: 4000,
        }
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the output token limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sampling_parameters() {
        let request = CompletionRequest::new("system", "prompt");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, 4000);
    }

    #[test]
    fn test_builder_overrides() {
        let request = CompletionRequest::new("s", "p")
            .with_temperature(0.2)
            .with_max_tokens(256);
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_tokens, 256);
    }
}
