use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::application::PromptLogRepository;
use crate::domain::LogEntry;

/// Best-effort recording of prompt/response exchanges.
///
/// `record` hands the write to a background task and returns at once. The
/// HTTP path drops the returned handle, so each entry is written at most once
/// and a failed write never changes a response that has already been built.
/// Callers that must outlive the write (the one-shot CLI) can await the handle.
pub struct LogExchangeUseCase {
    log_repo: Arc<dyn PromptLogRepository>,
}

impl LogExchangeUseCase {
    pub fn new(log_repo: Arc<dyn PromptLogRepository>) -> Self {
        Self { log_repo }
    }

    pub fn record(&self, entry: LogEntry) -> JoinHandle<()> {
        let log_repo = Arc::clone(&self.log_repo);
        tokio::spawn(async move {
            match log_repo.append(&entry).await {
                Ok(()) => debug!("Recorded exchange {}", entry.id()),
                Err(e) => warn!("Failed to record exchange {}: {}", entry.id(), e),
            }
        })
    }
}
