pub mod ask_controller;
pub mod completion_controller;
pub mod validate_controller;

pub use ask_controller::AskController;
pub use completion_controller::{CompletionController, METHOD_NOT_ALLOWED_MESSAGE};
pub use validate_controller::ValidateController;
