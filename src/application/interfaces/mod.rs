mod chat_client;
mod prompt_log_repository;

pub use chat_client::*;
pub use prompt_log_repository::*;
