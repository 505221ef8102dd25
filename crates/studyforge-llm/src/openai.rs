//! OpenAI-compatible provider implementation
//!
//! Talks to a chat-completions endpoint with bearer authorization. The
//! credential is supplied by the user and passed through untouched; it is
//! never validated or inspected here.
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Configurable endpoint and model
//! - Retry with exponential backoff on connectivity and 5xx failures
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use studyforge_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new("sk-...", "gpt-4o-mini");
//! // `complete_async` runs in an async context; the CompletionProvider
//! // trait impl wraps it for sync callers.
//! ```

use crate::LlmError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use studyforge_domain::traits::CompletionProvider;
use studyforge_domain::CompletionRequest;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Chat-completions provider with bearer authorization.
pub struct OpenAiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    n: u32,
    temperature: f32,
}

/// One chat message
#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

/// One generated choice
#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiProvider {
    /// Create a new provider against the default endpoint
    ///
    /// # Parameters
    ///
    /// - `api_key`: bearer credential supplied by the user
    /// - `model`: model identifier (e.g., "gpt-4o-mini")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key, model)
    }

    /// Create a new provider against a custom endpoint
    ///
    /// Useful for OpenAI-compatible gateways and local servers.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("default reqwest client");

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Send a completion request
    ///
    /// # Errors
    ///
    /// - `MissingCredential` if the configured key is empty (no request is
    ///   made)
    /// - `Connectivity` if no response is received after retries
    /// - `Api` for non-2xx statuses (5xx statuses are retried first)
    /// - `InvalidResponse` if the payload cannot be decoded or carries no
    ///   choices
    pub async fn complete_async(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::MissingCredential);
        }

        let url = format!("{}/v1/chat/completions", self.endpoint);

        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.prompt.clone(),
                },
            ],
            max_tokens: request.max_tokens,
            n: 1,
            temperature: request.temperature,
        };

        // Retry loop with exponential backoff; client errors (4xx) are
        // returned immediately since retrying cannot help.
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let payload: ChatCompletionResponse =
                            response.json().await.map_err(|e| {
                                LlmError::InvalidResponse(format!(
                                    "Failed to decode response: {}",
                                    e
                                ))
                            })?;

                        let choice = payload.choices.into_iter().next().ok_or_else(|| {
                            LlmError::InvalidResponse("Response carried no choices".to_string())
                        })?;

                        return Ok(choice.message.content);
                    } else if status.is_server_error() {
                        let body = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Api {
                            status: status.as_u16(),
                            body,
                        });
                    } else {
                        let body = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        return Err(LlmError::Api {
                            status: status.as_u16(),
                            body,
                        });
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Connectivity(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Connectivity("Max retries exceeded".to_string())))
    }
}

impl CompletionProvider for OpenAiProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
            .block_on(async { self.complete_async(request).await })
    }

    fn model(&self) -> &str {
        &self.model
    }
}
