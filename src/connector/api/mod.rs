pub mod config;
pub mod container;
pub mod controller;
pub mod cors;
pub mod http;

pub use config::ServerConfig;
pub use container::{Container, ContainerConfig};
pub use controller::{AskController, CompletionController, ValidateController};
pub use cors::CorsPolicy;
pub use http::{build_app, serve};
