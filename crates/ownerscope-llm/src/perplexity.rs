//! Perplexity Provider Implementation
//!
//! Integration with the Perplexity AI chat-completions API.
//!
//! # Features
//!
//! - Async HTTP communication with the chat-completions endpoint
//! - Configurable endpoint, model, and generation parameters
//! - Fixed per-request timeout; a request is attempted exactly once and a
//!   timeout surfaces as a transport failure, never a silent retry
//!
//! # Examples
//!
//! ```no_run
//! use ownerscope_llm::PerplexityProvider;
//!
//! let provider = PerplexityProvider::new("pplx-...")
//!     .with_model("sonar-pro")
//!     .with_timeout(30);
//! // `complete` is async; call it from an async context or through the
//! // blocking `CompletionProvider` trait impl.
//! ```

use crate::response::{extract_content, ChatResponse};
use crate::LlmError;
use ownerscope_domain::traits::CompletionProvider as CompletionProviderTrait;
use serde::Serialize;
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

/// Default model
pub const DEFAULT_MODEL: &str = "sonar-pro";

/// Default timeout for completion requests (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default completion token budget
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

const SYSTEM_MESSAGE: &str = "You are a helpful AI assistant that provides accurate \
    information about companies. Always provide information in a structured format.";

/// Chat-completions provider backed by the Perplexity API
///
/// The API key is an explicit constructor input; there is no process-wide
/// credential state.
pub struct PerplexityProvider {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    timeout_secs: u64,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<RequestMessage>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    stream: bool,
}

#[derive(Serialize)]
struct RequestMessage {
    role: &'static str,
    content: String,
}

impl PerplexityProvider {
    /// Create a new provider with default endpoint, model, and parameters
    ///
    /// # Parameters
    ///
    /// - `api_key`: Bearer credential for the API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            client: build_client(DEFAULT_TIMEOUT_SECS),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: 0.2,
            top_p: 0.9,
        }
    }

    /// Override the API base URL (e.g. for a proxy or test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout, in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self.client = build_client(timeout_secs);
        self
    }

    /// Override the completion token budget
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the nucleus sampling parameter
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    /// The configured request timeout, in seconds
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Send a prompt and return the first completion text
    ///
    /// # Errors
    ///
    /// - [`LlmError::Communication`] on network failure or timeout
    /// - [`LlmError::Unauthorized`] when the credential is rejected
    /// - [`LlmError::RateLimitExceeded`] on HTTP 429
    /// - [`LlmError::InvalidResponse`] when the reply envelope lacks a
    ///   usable completion
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE.to_string(),
                },
                RequestMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Communication(format!(
                        "request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    LlmError::Communication(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(LlmError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let envelope = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse envelope: {}", e)))?;

        extract_content(&envelope)
    }
}

fn build_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .expect("reqwest client with static configuration")
}

impl CompletionProviderTrait for PerplexityProvider {
    type Error = LlmError;

    fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("runtime error: {}", e)))?
            .block_on(async { self.complete(prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults() {
        let provider = PerplexityProvider::new("pplx-test");
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(provider.model, DEFAULT_MODEL);
        assert_eq!(provider.timeout_secs(), DEFAULT_TIMEOUT_SECS);
        assert_eq!(provider.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_provider_builders() {
        let provider = PerplexityProvider::new("pplx-test")
            .with_base_url("http://localhost:8080")
            .with_model("sonar")
            .with_timeout(5)
            .with_max_tokens(256);

        assert_eq!(provider.base_url, "http://localhost:8080");
        assert_eq!(provider.model, "sonar");
        assert_eq!(provider.timeout_secs(), 5);
        assert_eq!(provider.max_tokens, 256);
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "sonar-pro".to_string(),
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE.to_string(),
                },
                RequestMessage {
                    role: "user",
                    content: "who owns acme?".to_string(),
                },
            ],
            max_tokens: 1000,
            temperature: 0.2,
            top_p: 0.9,
            stream: false,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "sonar-pro");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "who owns acme?");
        assert_eq!(json["stream"], false);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        let provider = PerplexityProvider::new("pplx-test")
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(1);

        let result = provider.complete("test").await;
        match result {
            Err(LlmError::Communication(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }
}
