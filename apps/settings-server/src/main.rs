use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use settings_page::{Config, SettingsPageModule};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Settings server - serves the settings page data
#[derive(Parser)]
#[command(name = "settings-server")]
#[command(about = "Settings server - serves the settings page data")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address override (overrides config)
    #[arg(short, long)]
    bind: Option<String>,

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

    if let Some(ref path) = cli.config {
        if !Path::new(path).is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    init_logging(cli.verbose);

    // Layered config: defaults -> YAML (if provided) -> env (APP__*) -> CLI overrides
    let mut config =
        Config::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "info,settings_page=debug",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn check_config(config: Config) -> Result<()> {
    tracing::info!("Checking configuration...");
    SettingsPageModule::new(config.clone())?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    let module = SettingsPageModule::new(config)?;
    let bind_addr = module.config().bind_addr.clone();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!(%bind_addr, "Settings server listening");

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
        }
        shutdown.cancel();
    });

    axum::serve(listener, module.router())
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .context("server error")?;

    tracing::info!("Settings server stopped");
    Ok(())
}
