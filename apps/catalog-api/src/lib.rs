//! # Catalog API
//!
//! HTTP transport for the catalog service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog API Request Path                        │
//! │                                                                         │
//! │  Client                                                                │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  TraceLayer (tower-http) ── one span per request                       │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  routes::{products, options, health}                                   │
//! │    │  parse path ids ─┐                                                 │
//! │    │  parse JSON body ├── ValidationError ──► 400                       │
//! │    │  field rules ────┘                                                 │
//! │    ▼                                                                    │
//! │  ProductOrchestrator (AppState)                                        │
//! │    │                                                                    │
//! │    ├── Ok(value) ──► 200 / 201 JSON                                     │
//! │    └── CoreError ──► ApiError ──► 404 / 500 JSON                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config`] for the `CATALOG_*` environment variables.

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

use axum::Router;
use catalog_core::ProductOrchestrator;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::{CatalogConfig, StoreKind};
pub use error::{ApiError, ApiResult, ErrorCode};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: ProductOrchestrator,
}

impl AppState {
    pub fn new(catalog: ProductOrchestrator) -> Self {
        AppState { catalog }
    }
}

/// Builds the full router with tracing attached.
pub fn build_router(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
