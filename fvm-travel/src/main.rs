//! fvm-travel - Travel video directory service
//!
//! Serves the travel catalog to the site's directory page as JSON:
//! grouped and ranked views, search, country suggestions, per-video
//! detail, and header tab resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fvm_common::config::{Config, ConfigOverrides};
use fvm_common::Catalog;
use fvm_travel::api::service::BuildInfo;
use fvm_travel::{build_router, AppState};
use tokio::signal;
use tracing::info;

/// Command-line arguments for fvm-travel
#[derive(Parser, Debug)]
#[command(name = "fvm-travel")]
#[command(about = "Travel video directory service")]
#[command(version)]
struct Args {
    /// Configuration file (defaults to <config dir>/fvm/config.toml)
    #[arg(short, long, env = "FVM_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "FVM_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FVM_PORT")]
    port: Option<u16>,

    /// Catalog JSON file to serve instead of the embedded catalog
    #[arg(long, env = "FVM_CATALOG")]
    catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::resolve(ConfigOverrides {
        config_path: args.config,
        host: args.host,
        port: args.port,
        catalog_path: args.catalog,
        log_level: args.log_level,
    })
    .context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let build = BuildInfo::CURRENT;
    info!(
        "Starting FVM Travel (fvm-travel) v{} [{}] built {} ({})",
        build.version, build.git_hash, build.build_timestamp, build.build_profile
    );

    match &config.source {
        Some(path) => info!("Configuration: {}", path.display()),
        None => info!("Configuration: built-in defaults (no config file found)"),
    }

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::embedded().context("Failed to decode embedded catalog")?,
    };

    let state = AppState::new(catalog);
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("fvm-travel listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}
