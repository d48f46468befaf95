mod config;
mod registered_modules;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use grpc_hub::{GrpcHub, ReadySignal};
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Greetcalc Server - greeting and calculator services over gRPC
#[derive(Parser)]
#[command(name = "greetcalc-server")]
#[command(about = "Greetcalc Server - greeting and calculator services over gRPC")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address override, `host:port` or `uds:///path.sock` (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config: AppConfig = bootstrap::load_layered(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.listen.as_deref());

    if cli.print_config {
        println!("Effective configuration:\n{}", bootstrap::to_yaml(&config)?);
        return Ok(());
    }

    bootstrap::init_logging(&config.logging, cli.verbose)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Greetcalc Server starting"
    );

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    GrpcHub::new(&config.server, config.cors.clone())?;
    grpc_hub::cors::validate_cors(&config.cors)?;
    println!("Configuration is valid");
    println!("{}", bootstrap::to_yaml(config)?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let hub = Arc::new(GrpcHub::new(&config.server, config.cors)?);
    let installers = registered_modules::installers();

    let cancel = CancellationToken::new();
    let signals = bootstrap::cancel_on_shutdown(cancel.clone());

    let (ready, ready_rx) = ReadySignal::pair();
    {
        let hub = Arc::clone(&hub);
        tokio::spawn(async move {
            if ready_rx.await.is_ok() {
                let endpoint = hub.bound_endpoint().unwrap_or_default();
                tracing::info!(%endpoint, "server ready");
            }
        });
    }

    let result = hub
        .run_with_installers(installers, cancel.clone(), ready)
        .await;

    // Stop the signal watcher if the hub exited on its own.
    cancel.cancel();
    signals.abort();

    tracing::info!("Greetcalc Server stopped");
    result
}
