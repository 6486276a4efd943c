mod duckdb_prompt_log_repository;
mod in_memory_prompt_log_repository;
mod mock_chat_client;
mod openai_chat_client;

pub use duckdb_prompt_log_repository::*;
pub use in_memory_prompt_log_repository::*;
pub use mock_chat_client::*;
pub use openai_chat_client::*;
