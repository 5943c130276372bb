//! # Routes
//!
//! ```text
//! GET    /health
//! GET    /products[?name=text]
//! POST   /products
//! GET    /products/:id
//! PUT    /products/:id
//! DELETE /products/:id
//! GET    /products/:id/options
//! POST   /products/:id/options
//! GET    /products/:id/options/:option_id
//! PUT    /products/:id/options/:option_id
//! DELETE /products/:id/options/:option_id
//! ```

pub mod health;
pub mod options;
pub mod products;

use axum::routing::get;
use axum::Router;

use crate::AppState;

/// All catalog routes, before state is attached.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            get(products::get).put(products::update).delete(products::delete),
        )
        .route(
            "/products/:id/options",
            get(options::list).post(options::create),
        )
        .route(
            "/products/:id/options/:option_id",
            get(options::get).put(options::update).delete(options::delete),
        )
}
