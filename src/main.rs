//! Venture Directory - Main Server
//!
//! Investor and startup query API backed by MongoDB.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use venture_directory::{AppState, Config};

#[derive(Parser)]
#[command(name = "venture-directory")]
#[command(about = "Investor and startup directory API")]
struct Cli {
    /// Path to a YAML config file (default: ./config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Interface to bind (overrides config / HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config / PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print platform statistics as JSON
    Stats {
        /// Print the dashboard breakdown instead
        #[arg(long)]
        dashboard: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,venture_directory=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_yaml_and_env(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            venture_directory::start_server(config).await
        }
        Commands::Stats { dashboard } => run_stats(config, dashboard).await,
    }
}

async fn run_stats(config: Config, dashboard: bool) -> Result<()> {
    let state = AppState::new(config).await?;
    state.close_after(print_stats(&state, dashboard)).await
}

async fn print_stats(state: &AppState, dashboard: bool) -> Result<()> {
    let stats = state.directory.stats();
    let json = if dashboard {
        serde_json::to_string_pretty(&stats.dashboard().await?)?
    } else {
        serde_json::to_string_pretty(&stats.platform().await?)?
    };
    println!("{}", json);
    Ok(())
}
