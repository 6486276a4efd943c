use async_trait::async_trait;

use crate::domain::DomainError;

/// Sends a single prompt to a chat-completion model and returns the reply text.
///
/// Implementors own the model choice, the system priming message and sampling
/// parameters; callers only supply the user turn.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Returns the first choice's text, or an empty string when the provider
    /// sent no content. Transport and provider failures are returned as-is.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}
