use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use duckdb::{params, Connection};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::PromptLogRepository;
use crate::domain::{DomainError, LogEntry, LogRecord};

/// Exchange log backed by the `openai_logs` table of a DuckDB file.
///
/// Rows are only ever inserted. `logged_at` is filled in by DuckDB itself.
pub struct DuckdbPromptLogRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DuckdbPromptLogRepository {
    pub fn new(db_path: &Path) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::storage(format!("Failed to open DuckDB database: {}", e)))?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn in_memory() -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DomainError::storage(format!("Failed to open DuckDB in-memory DB: {}", e))
        })?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS openai_logs (
                id TEXT PRIMARY KEY,
                prompt TEXT NOT NULL,
                response TEXT,
                error TEXT,
                logged_at TIMESTAMP NOT NULL DEFAULT current_timestamp
            );
            "#,
        )
        .map_err(|e| DomainError::storage(format!("Failed to initialize openai_logs schema: {}", e)))?;

        debug!("DuckDB openai_logs table initialized");
        Ok(())
    }

    /// All persisted records, oldest first. Timestamps are epoch milliseconds.
    pub async fn records(&self) -> Result<Vec<LogRecord>, DomainError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(
                "SELECT id, prompt, response, error, epoch_ms(logged_at) \
                 FROM openai_logs ORDER BY logged_at, id",
            )
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map([], |row| {
                let entry = LogEntry::reconstitute(
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<String>>(3)?,
                );
                Ok(LogRecord::new(entry, row.get::<_, i64>(4)?))
            })
            .map_err(|e| DomainError::storage(format!("Failed to query openai_logs: {}", e)))?;

        let mut records = Vec::new();
        for row in rows {
            records
                .push(row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?);
        }

        Ok(records)
    }
}

#[async_trait]
impl PromptLogRepository for DuckdbPromptLogRepository {
    async fn append(&self, entry: &LogEntry) -> Result<(), DomainError> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO openai_logs (id, prompt, response, error) VALUES (?, ?, ?, ?)",
            params![entry.id(), entry.prompt(), entry.response(), entry.error()],
        )
        .map_err(|e| DomainError::storage(format!("Failed to append log entry: {}", e)))?;

        debug!("Appended exchange {} to DuckDB", entry.id());
        Ok(())
    }
}
