//! # Catalog API Server
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog API Startup                              │
//! │                                                                         │
//! │  init_tracing ──► CatalogConfig::load ──► open store ──► serve         │
//! │                                              │                          │
//! │                            CATALOG_STORE=sqlite ──► catalog-db         │
//! │                            CATALOG_STORE=memory ──► in-memory stores   │
//! │                                                                         │
//! │  Ctrl+C / SIGTERM ──► drain in-flight requests ──► close pool          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use catalog_api::{build_router, AppState, CatalogConfig, StoreKind};
use catalog_core::store::memory::{InMemoryOptionStore, InMemoryProductStore};
use catalog_core::ProductOrchestrator;
use catalog_db::Database;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting catalog API server...");

    let config = CatalogConfig::load()?;
    info!(
        addr = %config.socket_addr(),
        store = %config.store,
        db_path = %config.db_path.display(),
        "Configuration loaded"
    );

    let (catalog, db) = match config.store {
        StoreKind::Memory => {
            info!("Using in-memory store; data is lost on shutdown");
            let catalog = ProductOrchestrator::new(
                Arc::new(InMemoryProductStore::new()),
                Arc::new(InMemoryOptionStore::new()),
            );
            (catalog, None)
        }
        StoreKind::Sqlite => {
            let db = Database::new(config.db_config())
                .await
                .context("failed to open catalog database")?;
            info!("Database ready");
            let catalog = ProductOrchestrator::new(Arc::new(db.products()), Arc::new(db.options()));
            (catalog, Some(db))
        }
    };

    let app = build_router(AppState::new(catalog));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = db {
        db.close().await;
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=catalog=trace` - Show trace for catalog crates only
/// - Default: `info,catalog=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
