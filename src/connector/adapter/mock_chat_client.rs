use async_trait::async_trait;

use crate::application::ChatClient;
use crate::domain::DomainError;

/// Deterministic [`ChatClient`] for offline runs and tests: echoes the prompt.
pub struct MockChatClient;

impl MockChatClient {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        Ok(format!("Echo: {prompt}"))
    }
}
