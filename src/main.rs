//! Greeter service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pipeline_greeter::api::{self, create_router, AppState};
use pipeline_greeter::config::Config;
use pipeline_greeter::utils::shutdown_signal;

/// Greeting and health-check HTTP service.
#[derive(Parser, Debug)]
#[command(name = "pipeline-greeter")]
#[command(about = "Serves a greeting and a health check over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default).
    Serve,

    /// Print the effective configuration and exit.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Configuration decides the log filter, so load it before logging starts
    let config = Config::load();
    let directive = match &config {
        Ok(config) => config.log_filter(args.verbose),
        Err(_) => "info".to_string(),
    };
    if !init_tracing(&directive, args.json) {
        warn!("Invalid log filter {:?}, falling back to info", directive);
    }

    let config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config, &directive),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

/// Parse a filter directive, falling back to `info` when it is invalid.
///
/// The flag is false when the fallback was used.
fn build_filter(directive: &str) -> (EnvFilter, bool) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new("info"), false),
    }
}

/// Install the process-wide tracing subscriber.
///
/// Returns false when `directive` was invalid and `info` is used instead.
fn init_tracing(directive: &str, json: bool) -> bool {
    let (filter, valid) = build_filter(directive);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
    valid
}

/// Print the effective configuration.
fn cmd_check_config(config: &Config, directive: &str) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("PIPELINE GREETER - CONFIGURATION CHECK");
    println!("======================================================================");
    println!("  Version:      {}", config.app_version);
    println!("  Environment:  {}", config.environment);
    println!("  Debug Mode:   {}", if config.debug { "Enabled" } else { "Disabled" });
    println!("  Bind Address: {}", config.bind_addr());
    println!("  Log Filter:   {}", directive);
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP service until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    if config.debug {
        info!("Debug mode enabled");
    }

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;

    let router = create_router(AppState::new(&config));
    api::serve(listener, router, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}
