//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completions (OpenAI over HTTP, plus an offline mock)
//! - Exchange log storage (DuckDB, in-memory)
//! - Inbound surfaces (axum HTTP endpoint, CLI controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
