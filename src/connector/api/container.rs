use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::{
    ChatClient, GenerateCompletionUseCase, LogExchangeUseCase, PromptLogRepository,
    DEFAULT_COMPLETION_TIMEOUT,
};
use crate::{DuckdbPromptLogRepository, InMemoryPromptLogRepository, MockChatClient, OpenAiChatClient};

pub struct ContainerConfig {
    pub data_dir: String,
    pub mock_completions: bool,
    pub memory_logs: bool,
    pub completion_timeout: Duration,
}

/// Wires adapters into use cases once at startup. Lives for the whole process
/// and is shared read-only by every request.
pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    log_repo: Arc<dyn PromptLogRepository>,
    completion_timeout: Duration,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let chat_client: Arc<dyn ChatClient> = if config.mock_completions {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            let client = OpenAiChatClient::from_env()?;
            debug!("Using OpenAI chat client at {}", client.url());
            Arc::new(client)
        };

        let log_repo: Arc<dyn PromptLogRepository> = if config.memory_logs {
            debug!("Using in-memory exchange log");
            Arc::new(InMemoryPromptLogRepository::new())
        } else {
            std::fs::create_dir_all(&config.data_dir)?;
            let db_path = PathBuf::from(&config.data_dir).join("prompt-relay.duckdb");
            info!("Logging exchanges to {}", db_path.display());
            Arc::new(DuckdbPromptLogRepository::new(&db_path)?)
        };

        Ok(Self::with_services(chat_client, log_repo).with_completion_timeout(config.completion_timeout))
    }

    pub fn with_services(
        chat_client: Arc<dyn ChatClient>,
        log_repo: Arc<dyn PromptLogRepository>,
    ) -> Self {
        Self {
            chat_client,
            log_repo,
            completion_timeout: DEFAULT_COMPLETION_TIMEOUT,
        }
    }

    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    pub fn generate_use_case(&self) -> GenerateCompletionUseCase {
        GenerateCompletionUseCase::new(self.chat_client.clone()).with_timeout(self.completion_timeout)
    }

    pub fn log_use_case(&self) -> LogExchangeUseCase {
        LogExchangeUseCase::new(self.log_repo.clone())
    }
}
