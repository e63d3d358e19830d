//! Ownerscope LLM Provider Layer
//!
//! Remote inference plumbing for the ownership pipeline.
//!
//! # Architecture
//!
//! This crate provides implementations of the `CompletionProvider` trait
//! from `ownerscope-domain`. The provider sends a prompt to a
//! chat-completions endpoint and returns the first textual completion,
//! already unwrapped from the response envelope.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `PerplexityProvider`: Perplexity AI chat-completions integration
//!
//! # Examples
//!
//! ```
//! use ownerscope_llm::MockProvider;
//! use ownerscope_domain::traits::CompletionProvider;
//!
//! let provider = MockProvider::new("Hello from the model!");
//! let result = provider.complete("test prompt").unwrap();
//! assert_eq!(result, "Hello from the model!");
//! ```

#![warn(missing_docs)]

pub mod perplexity;
pub mod response;

use ownerscope_domain::traits::CompletionProvider as CompletionProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use perplexity::PerplexityProvider;
pub use response::{extract_content, ChatChoice, ChatMessage, ChatResponse};

/// Errors that can occur during remote completion operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or HTTP transport error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response envelope missing the expected completion payload
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credential rejected by the remote API
    #[error("Unauthorized: API key rejected")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without any network calls.
///
/// # Examples
///
/// ```
/// use ownerscope_llm::MockProvider;
/// use ownerscope_domain::traits::CompletionProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.complete("any prompt").unwrap(), "Fixed response");
///
/// // Per-prompt responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_response("prompt2", "response2");
/// assert_eq!(provider.complete("prompt1").unwrap(), "response1");
/// assert_eq!(provider.complete("prompt2").unwrap(), "response2");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

const ERROR_SENTINEL: &str = "\u{0}ERROR\u{0}";

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Configure an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), ERROR_SENTINEL.to_string());
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

impl CompletionProviderTrait for MockProvider {
    type Error = LlmError;

    fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            if response == ERROR_SENTINEL {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.complete("any prompt");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.complete("hello").unwrap(), "world");
        assert_eq!(provider.complete("foo").unwrap(), "bar");
        assert_eq!(provider.complete("unknown").unwrap(), "Default mock response");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.complete("prompt1").unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.complete("prompt2").unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.complete("bad prompt");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[test]
    fn test_mock_provider_clone_shares_count() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.complete("test").unwrap();

        // Both share the same call count through the Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
