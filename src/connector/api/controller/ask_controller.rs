use anyhow::Result;

use crate::domain::LogEntry;

use super::super::Container;

/// One-shot prompt from the command line. Unlike the HTTP path it waits for
/// the log write so the entry is not lost when the process exits.
pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, prompt: String) -> Result<String> {
        let result = self.container.generate_use_case().execute(Some(&prompt)).await;

        let entry = match &result {
            Ok(text) => LogEntry::success(prompt.as_str(), text.as_str()),
            Err(e) => LogEntry::failure(prompt.as_str(), e.message()),
        };
        self.container.log_use_case().record(entry).await?;

        Ok(result?)
    }
}
