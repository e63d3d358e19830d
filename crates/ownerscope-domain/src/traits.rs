//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

/// Trait for remote completion operations
///
/// Implemented by the infrastructure layer (ownerscope-llm). The provider
/// takes a prompt and returns the first textual completion of the reply,
/// already unwrapped from the transport envelope.
pub trait CompletionProvider {
    /// Error type for provider operations
    type Error;

    /// Send a prompt and return the completion text
    fn complete(&self, prompt: &str) -> Result<String, Self::Error>;
}
