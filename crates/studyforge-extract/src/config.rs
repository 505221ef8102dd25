//! Configuration for the Generator

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum input context length (characters)
    pub max_context_length: usize,

    /// Maximum time for a single provider call (seconds)
    pub request_timeout_secs: u64,

    /// Sampling temperature forwarded to the provider
    pub temperature: f32,

    /// Output token limit forwarded to the provider
    pub max_tokens: u32,
}

impl GeneratorConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_context_length == 0 {
            return Err("max_context_length must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature {} out of range [0.0, 2.0]",
                self.temperature
            ));
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for GeneratorConfig {
    /// Defaults: 15k characters of context, temperature 0.7, 4000
    /// output tokens.
    fn default() -> Self {
        Self {
            max_context_length: 15_000,
            request_timeout_secs: 120,
            temperature: 0.7,
            max_tokens: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_context_length, 15_000);
    }

    #[test]
    fn test_invalid_max_context_length() {
        let mut config = GeneratorConfig::default();
        config.max_context_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_temperature() {
        let mut config = GeneratorConfig::default();
        config.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_as_duration() {
        let config = GeneratorConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GeneratorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = GeneratorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.max_context_length, parsed.max_context_length);
        assert_eq!(config.request_timeout_secs, parsed.request_timeout_secs);
        assert_eq!(config.max_tokens, parsed.max_tokens);
    }
}
