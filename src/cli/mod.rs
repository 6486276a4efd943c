use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP completion endpoint
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Send one prompt through validation, completion and logging, then print the reply
    Ask {
        prompt: String,
    },

    /// Check a prompt against the validation rules without calling the model
    Validate {
        prompt: String,
    },
}
