use async_trait::async_trait;

use crate::domain::{DomainError, LogEntry};

/// Append-only persistence for prompt/response exchanges.
#[async_trait]
pub trait PromptLogRepository: Send + Sync {
    /// Persist one entry. The store assigns the timestamp.
    async fn append(&self, entry: &LogEntry) -> Result<(), DomainError>;
}
