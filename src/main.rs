use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use prompt_relay::connector::{AskController, ValidateController};
use prompt_relay::{build_app, serve, Commands, Container, ContainerConfig, ServerConfig};

#[derive(Parser)]
#[command(name = "prompt-relay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.prompt-relay")]
    data_dir: String,

    /// JSON file with the CORS allow-list, request timeout and concurrency cap
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Keep the exchange log in memory instead of DuckDB
    #[arg(long, global = true)]
    memory_logs: bool,

    /// Answer prompts with a local echo instead of calling OpenAI
    #[arg(long, global = true)]
    mock_completions: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match &cli.command {
        // Validation needs neither the model nor the log store.
        Commands::Validate { prompt } => {
            println!("{}", ValidateController::new().validate(prompt.clone())?);
        }
        Commands::Serve { port, public } => {
            let (server_config, container) = start_services(&cli)?;
            if server_config.allowed_origins.is_empty() {
                warn!("No allowed origins configured; cross-origin browser requests will be rejected");
            }
            let ip = if *public {
                Ipv4Addr::UNSPECIFIED
            } else {
                Ipv4Addr::LOCALHOST
            };
            info!(
                "Starting prompt-relay on port {} (timeout {}s, concurrency {})",
                port,
                server_config.completion_timeout().as_secs(),
                server_config.max_concurrency()
            );
            let app = build_app(Arc::new(container), &server_config);
            serve(app, SocketAddr::from((ip, *port))).await?;
        }
        Commands::Ask { prompt } => {
            let (_, container) = start_services(&cli)?;
            println!("{}", AskController::new(&container).ask(prompt.clone()).await?);
        }
    }

    Ok(())
}

fn start_services(cli: &Cli) -> Result<(ServerConfig, Container)> {
    let server_config = match cli.config.as_deref() {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    let container = Container::new(ContainerConfig {
        data_dir: expand_tilde(&cli.data_dir),
        mock_completions: cli.mock_completions,
        memory_logs: cli.memory_logs,
        completion_timeout: server_config.completion_timeout(),
    })?;

    Ok((server_config, container))
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
