//! Beemo Exporter - republishes portal exports as CSV downloads
//!
//! Logs into the Beemo supervision portal once at startup, then periodically
//! downloads and reshapes three tabular exports (licenses, backup sets,
//! groups) and serves them as CSV files over HTTP.

mod api;
mod cache;
mod config;
mod datasets;
mod error;
mod portal;
mod tasks;

use std::net::SocketAddr;

use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::ExportCache;
use config::{Config, SERVER_PORT};
use portal::PortalSession;
use tasks::spawn_refresh_task;

/// Main entry point for the exporter.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load credentials and refresh interval from environment variables
/// 3. Log into the portal (fatal on failure, no retry)
/// 4. Start the background dataset refresh task
/// 5. Create the Axum router with the three export endpoints
/// 6. Start the HTTP server on port 8000
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beemo_exporter=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Beemo CSV exporter");

    // Load configuration; missing credentials are fatal
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Configuration error: {}", err);
            std::process::exit(1);
        }
    };
    info!(
        "Configuration loaded: interval={}min, port={}",
        config.interval_minutes, SERVER_PORT
    );

    // Log into the portal once; a rejected login is fatal
    let session = match PortalSession::login(&config.username, &config.password).await {
        Ok(session) => session,
        Err(err) => {
            error!("Portal login failed: {}", err);
            std::process::exit(1);
        }
    };

    // Create application state with an empty cache; every dataset serves 503
    // until its first refresh lands
    let state = AppState::new(ExportCache::new());

    // Start the background refresh task
    let refresh_handle = spawn_refresh_task(session, state.cache.clone(), config.interval_minutes);
    info!("Background refresh task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to the fixed port
    let addr = SocketAddr::from(([0, 0, 0, 0], SERVER_PORT));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(refresh_handle))
        .await
    {
        error!("Server error: {}", err);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the refresh task and allows graceful shutdown.
async fn shutdown_signal(refresh_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the refresh task
    refresh_handle.abort();
    warn!("Refresh task aborted");
}
