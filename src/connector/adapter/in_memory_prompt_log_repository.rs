use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::PromptLogRepository;
use crate::domain::{current_timestamp_millis, DomainError, LogEntry, LogRecord};

/// Process-local exchange log, used with `--memory-logs` and in tests.
pub struct InMemoryPromptLogRepository {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl InMemoryPromptLogRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of everything appended so far, oldest first.
    pub async fn records(&self) -> Vec<LogRecord> {
        self.records.lock().await.clone()
    }
}

impl Default for InMemoryPromptLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptLogRepository for InMemoryPromptLogRepository {
    async fn append(&self, entry: &LogEntry) -> Result<(), DomainError> {
        let mut records = self.records.lock().await;
        records.push(LogRecord::new(entry.clone(), current_timestamp_millis()));
        debug!("Appended exchange {} to memory ({} total)", entry.id(), records.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_assigns_timestamp_and_keeps_order() {
        let repo = InMemoryPromptLogRepository::new();

        repo.append(&LogEntry::success("first", "one")).await.unwrap();
        repo.append(&LogEntry::failure("second", "boom")).await.unwrap();

        let records = repo.records().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].entry().prompt(), "first");
        assert_eq!(records[1].entry().error(), Some("boom"));
        assert!(records[0].timestamp() > 0);
        assert!(records[0].timestamp() <= records[1].timestamp());
    }
}
