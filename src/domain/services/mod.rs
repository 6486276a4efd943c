//! Domain services containing core business rules.

mod prompt_validator;

pub use prompt_validator::*;
