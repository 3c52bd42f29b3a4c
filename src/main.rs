//! Event Statistics Service - Binary Entry Point
//!
//! This is the main entry point for the event-stats-server binary.

use std::sync::Arc;

use event_stats::api::{create_router, AppState};
use event_stats::config::{ServerConfig, DEFAULT_LOG_FILTER};
use event_stats::event_store::EventStore;
use event_stats::types::ServerResult;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ServerResult<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // The store lives for the whole process and is dropped after shutdown
    let store = Arc::new(EventStore::with_config(config.store_config()));
    let state = Arc::new(AppState::new(store));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Starting {} v{} on http://{} (window {}s)",
        event_stats::NAME,
        event_stats::VERSION,
        addr,
        config.window.num_seconds()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
