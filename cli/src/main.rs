//! Station service CLI server
//!
//! Headless REST API for the charging station directory and booking ledger,
//! suitable for a systemd service, Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/station-service/config.toml)
//! station-service
//!
//! # Custom config path
//! station-service --config /etc/station-service/config.toml
//!
//! # Override the port
//! station-service --port 8080
//!
//! # Validate config without starting
//! station-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use station_service::config::AppConfig;
use station_service::server::{init_tracing, ServerHandle, ServerOptions};

/// REST API for charging stations and bookings.
#[derive(Parser, Debug)]
#[command(
    name = "station-service",
    version,
    about = "REST API for a charging station directory and booking ledger",
    long_about = "Station service: browse, filter and manage charging stations \
                  and record bookings against them.\n\n\
                  Default config: ~/.config/station-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "STATION_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(station_service::default_config_path);

    let loaded = AppConfig::load(&config_path);

    // `--check` must fail loudly on a bad file instead of falling back.
    if cli.check {
        let mut config = match loaded {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Configuration is invalid: {}", e);
                std::process::exit(1);
            }
        };
        if let Some(port) = cli.port {
            config.server.port = port;
        }
        if let Some(level) = cli.log_level {
            config.logging.level = level;
        }
        println!("Configuration is valid");
        println!("   Config file    : {}", config_path.display());
        println!("   Listen address : {}", config.server.address());
        println!("   Database       : {}", config.database.url);
        println!("   Log level      : {}", config.logging.level);
        println!("   Strict updates : {}", config.api.strict_updates);
        return Ok(());
    }

    let mut config = match loaded {
        Ok(mut cfg) => {
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            // Init tracing first so subsequent logs are formatted properly
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            // Fallback tracing init
            let level = cli.log_level.clone().unwrap_or_else(|| "info".to_string());
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(level))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    // Wait for shutdown signal, then clean up
    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
