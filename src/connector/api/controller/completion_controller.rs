use axum::http::{Method, StatusCode};
use tracing::{error, warn};

use crate::domain::{DomainError, LogEntry, PromptRequest, PromptResponse};

use super::super::Container;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str =
    "Method Not Allowed. Only POST requests are accepted.";

/// Turns one HTTP exchange into a status and a [`PromptResponse`].
///
/// Every outcome except a rejected method is followed by exactly one
/// fire-and-forget log write.
pub struct CompletionController<'a> {
    container: &'a Container,
}

impl<'a> CompletionController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn handle(&self, method: &Method, body: &[u8]) -> (StatusCode, PromptResponse) {
        if method != Method::POST {
            return method_not_allowed();
        }

        let request = PromptRequest::from_body(body);
        let prompt = request.prompt();

        match self.container.generate_use_case().execute(prompt).await {
            Ok(text) => {
                self.container
                    .log_use_case()
                    .record(LogEntry::success(prompt.unwrap_or_default(), text.as_str()));
                (StatusCode::OK, PromptResponse::success(text))
            }
            Err(e) => self.fail(prompt.unwrap_or_default(), e),
        }
    }

    /// Answers a request whose body never reached the handler, e.g. one
    /// larger than the body limit. No prompt could be read, so the log entry
    /// carries an empty one.
    pub fn handle_unreadable_body(
        &self,
        method: &Method,
        error: DomainError,
    ) -> (StatusCode, PromptResponse) {
        if method != Method::POST {
            return method_not_allowed();
        }
        self.fail("", error)
    }

    fn fail(&self, prompt: &str, e: DomainError) -> (StatusCode, PromptResponse) {
        if e.is_taxonomy() {
            warn!("Rejected completion request: {}", e);
        } else {
            error!("Error calling chat completion API: {}", e);
        }
        self.container
            .log_use_case()
            .record(LogEntry::failure(prompt, e.message()));

        let status =
            StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, PromptResponse::failure(e.public_message()))
    }
}

fn method_not_allowed() -> (StatusCode, PromptResponse) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        PromptResponse::failure(METHOD_NOT_ALLOWED_MESSAGE),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::domain::GENERIC_ERROR_MESSAGE;
    use crate::{InMemoryPromptLogRepository, MockChatClient};

    fn container(logs: &Arc<InMemoryPromptLogRepository>) -> Container {
        Container::with_services(Arc::new(MockChatClient::new()), logs.clone())
    }

    async fn settle(logs: &InMemoryPromptLogRepository) -> usize {
        for _ in 0..100 {
            if !logs.records().await.is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        logs.records().await.len()
    }

    #[tokio::test]
    async fn unreadable_body_is_masked_and_logged() {
        let logs = Arc::new(InMemoryPromptLogRepository::new());
        let container = container(&logs);

        let (status, response) = CompletionController::new(&container).handle_unreadable_body(
            &Method::POST,
            DomainError::internal("Failed to read request body: connection reset"),
        );

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!response.is_success());
        assert_eq!(response.error(), Some(GENERIC_ERROR_MESSAGE));
        assert_eq!(settle(&logs).await, 1);
        let records = logs.records().await;
        assert_eq!(records[0].entry().prompt(), "");
        assert_eq!(
            records[0].entry().error(),
            Some("Failed to read request body: connection reset")
        );
    }

    #[tokio::test]
    async fn unreadable_body_on_wrong_method_is_still_405() {
        let logs = Arc::new(InMemoryPromptLogRepository::new());
        let container = container(&logs);

        let (status, response) = CompletionController::new(&container)
            .handle_unreadable_body(&Method::PUT, DomainError::internal("boom"));

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.error(), Some(METHOD_NOT_ALLOWED_MESSAGE));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(logs.records().await.is_empty());
    }
}
