use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::DomainError;

/// Settings for the HTTP surface, read from a static JSON file:
///
/// ```json
/// {
///   "allowedOrigins": ["https://chat.example.com", "http://localhost:5173"],
///   "timeoutSeconds": 300,
///   "concurrency": 80
/// }
/// ```
///
/// Every field is optional. An empty allow-list rejects all cross-origin
/// browser requests; `"*"` admits any origin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub allowed_origins: Vec<String>,
    pub timeout_seconds: u64,
    pub concurrency: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            timeout_seconds: 300,
            concurrency: 80,
        }
    }
}

impl ServerConfig {
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
            .map_err(|e| DomainError::config(format!("{}: {}", path.display(), e.message())))
    }

    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw)
            .map_err(|e| DomainError::config(format!("Invalid server config: {}", e)))
    }

    /// Outer deadline for a single completion call (at least one second).
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    /// Maximum number of requests handled at once (at least one).
    pub fn max_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}
