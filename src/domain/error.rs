use thiserror::Error;

/// Message returned to callers for any failure outside the validation/timeout
/// taxonomy. The underlying error text only ever reaches the exchange log.
pub const GENERIC_ERROR_MESSAGE: &str = "Unable to process your request at the moment.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Provider error: {message}")]
    Provider {
        status: Option<u16>,
        message: String,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn provider(status: Option<u16>, msg: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: msg.into(),
        }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Validation and timeout errors carry their own status and a message that
    /// is safe to hand back to the caller.
    pub fn is_taxonomy(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Timeout(_))
    }

    pub fn is_storage_error(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Timeout(_) => 504,
            Self::Provider { status, .. } => status.unwrap_or(500),
            Self::Storage(_) | Self::Config(_) | Self::Internal(_) => 500,
        }
    }

    /// The raw message without the variant prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::Timeout(msg)
            | Self::Storage(msg)
            | Self::Config(msg)
            | Self::Internal(msg) => msg,
            Self::Provider { message, .. } => message,
        }
    }

    pub fn public_message(&self) -> &str {
        if self.is_taxonomy() {
            self.message()
        } else {
            GENERIC_ERROR_MESSAGE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_carries_400_and_its_own_message() {
        let err = DomainError::validation("Prompt is required in the request body.");
        assert_eq!(err.status_code(), 400);
        assert!(err.is_taxonomy());
        assert_eq!(err.public_message(), "Prompt is required in the request body.");
    }

    #[test]
    fn timeout_carries_504() {
        let err = DomainError::timeout("took too long");
        assert_eq!(err.status_code(), 504);
        assert_eq!(err.public_message(), "took too long");
    }

    #[test]
    fn provider_status_is_passed_through() {
        let err = DomainError::provider(Some(429), "rate limited upstream");
        assert_eq!(err.status_code(), 429);
        assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(err.message(), "rate limited upstream");
    }

    #[test]
    fn provider_without_status_defaults_to_500() {
        let err = DomainError::provider(None, "connection reset");
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_taxonomy());
    }

    #[test]
    fn storage_errors_are_hidden_from_callers() {
        let err = DomainError::storage("disk full");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn internal_errors_are_hidden_from_callers() {
        let err = DomainError::internal("Failed to read request body");
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_taxonomy());
        assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);
    }
}
