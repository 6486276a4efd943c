use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One request/response exchange, as handed to the log store.
///
/// Entries are append-only; the store assigns the timestamp when it persists
/// the entry (see [`LogRecord`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    id: String,
    prompt: String,
    response: Option<String>,
    error: Option<String>,
}

impl LogEntry {
    pub fn success(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            prompt: prompt.into(),
            response: Some(response.into()),
            error: None,
        }
    }

    pub fn failure(prompt: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            prompt: prompt.into(),
            response: None,
            error: Some(error.into()),
        }
    }

    /// Reconstitutes from persisted data (used by adapters).
    pub fn reconstitute(
        id: String,
        prompt: String,
        response: Option<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            id,
            prompt,
            response,
            error,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// A persisted [`LogEntry`] together with its store-assigned timestamp
/// (milliseconds since the Unix epoch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    entry: LogEntry,
    timestamp: i64,
}

impl LogRecord {
    pub fn new(entry: LogEntry, timestamp: i64) -> Self {
        Self { entry, timestamp }
    }

    pub fn entry(&self) -> &LogEntry {
        &self.entry
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

pub fn current_timestamp_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
