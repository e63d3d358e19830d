//! Chat-completions response envelope
//!
//! Wire types for the remote API reply and the content-extraction step that
//! pulls the first textual completion out of it.

use crate::LlmError;
use serde::Deserialize;

/// Top-level chat-completions reply envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices; the first one carries the answer
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// A single completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The assistant message, absent in malformed replies
    #[serde(default)]
    pub message: Option<ChatMessage>,
}

/// The assistant message inside a choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    /// Completion text, absent or empty in malformed replies
    #[serde(default)]
    pub content: Option<String>,
}

/// Extract the first textual completion from a reply envelope.
///
/// Fails with [`LlmError::InvalidResponse`] when the envelope has no
/// choices, the first choice lacks a message payload, or the payload text
/// is empty.
///
/// # Examples
///
/// ```
/// use ownerscope_llm::{extract_content, ChatResponse};
///
/// let reply: ChatResponse = serde_json::from_str(
///     r#"{"choices": [{"message": {"content": "hello"}}]}"#,
/// ).unwrap();
/// assert_eq!(extract_content(&reply).unwrap(), "hello");
/// ```
pub fn extract_content(response: &ChatResponse) -> Result<String, LlmError> {
    let first_choice = response
        .choices
        .first()
        .ok_or_else(|| LlmError::InvalidResponse("no choices in response".to_string()))?;

    let message = first_choice
        .message
        .as_ref()
        .ok_or_else(|| LlmError::InvalidResponse("no message in first choice".to_string()))?;

    match message.content.as_deref() {
        Some(content) if !content.is_empty() => Ok(content.to_string()),
        _ => Err(LlmError::InvalidResponse(
            "empty completion content".to_string(),
        )),
    }
}
