mod log_entry;
mod prompt;

pub use log_entry::*;
pub use prompt::*;
