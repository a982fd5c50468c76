//! Calendar event service entry point
//!
//! Loads the YAML configuration, builds the in-memory event store and the
//! HTTP application, and serves until interrupted.

use anyhow::{Context, Result};
use calendar::api::build_app;
use calendar::config::CalendarConfig;
use calendar::events::{EventStore, EventsState};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "calendar")]
#[command(version)]
#[command(about = "Calendar event service with a concurrent in-memory store")]
struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        env = "CALENDAR_CONFIG",
        default_value = "configs/config.yaml"
    )]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("calendar={},tower_http=info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = CalendarConfig::load(&cli.config).with_context(|| {
        format!(
            "failed to load configuration from `{}`",
            cli.config.display()
        )
    })?;

    let store = Arc::new(EventStore::new());
    let app = build_app(EventsState { store });

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Calendar server started on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Calendar server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down...");
}
