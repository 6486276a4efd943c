use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::application::ChatClient;
use crate::domain::{validate_prompt, DomainError};

/// Outer deadline applied when none is configured, matching the hosting
/// platform's request timeout.
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(300);

pub const TIMEOUT_MESSAGE: &str = "The request timed out. Please try again later.";

/// Validates a prompt and, only if it passes, asks the chat model for a reply.
pub struct GenerateCompletionUseCase {
    chat_client: Arc<dyn ChatClient>,
    timeout: Duration,
}

impl GenerateCompletionUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client,
            timeout: DEFAULT_COMPLETION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn execute(&self, prompt: Option<&str>) -> Result<String, DomainError> {
        validate_prompt(prompt)?;
        let prompt = prompt.unwrap_or_default();

        info!("Requesting completion ({} chars)", prompt.chars().count());
        let start_time = Instant::now();

        let text = tokio::time::timeout(self.timeout, self.chat_client.complete(prompt))
            .await
            .map_err(|_| DomainError::timeout(TIMEOUT_MESSAGE))??;

        debug!(
            "Completion returned {} chars in {:?}",
            text.chars().count(),
            start_time.elapsed()
        );
        Ok(text)
    }
}
