pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, GenerateCompletionUseCase, LogExchangeUseCase, PromptLogRepository,
};

pub use cli::Commands;

pub use connector::{
    build_app, serve, Container, ContainerConfig, DuckdbPromptLogRepository,
    InMemoryPromptLogRepository, MockChatClient, OpenAiChatClient, ServerConfig,
};

pub use domain::{
    validate_prompt, DomainError, LogEntry, LogRecord, PromptRequest, PromptResponse,
};
