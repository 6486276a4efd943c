mod generate_completion;
mod log_exchange;

pub use generate_completion::*;
pub use log_exchange::*;
