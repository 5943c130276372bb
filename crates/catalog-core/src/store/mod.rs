//! # Store Contracts
//!
//! Persistence gateways consumed by the orchestrators.
//!
//! ## Contract Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Contracts                                      │
//! │                                                                         │
//! │  ProductOrchestrator                                                   │
//! │       │                                                                 │
//! │       ├──► ProductStore                                                 │
//! │       │    ├── get_all / get_by_name / get_by_id / exists              │
//! │       │    └── create / update / delete                                │
//! │       │                                                                 │
//! │       └──► OptionOrchestrator ──► OptionStore                          │
//! │            ├── get_all_for_product / get_by_product_and_id            │
//! │            ├── exists_by_id   (GLOBAL - not scoped by product)         │
//! │            └── create / update / delete_by_product_and_id              │
//! │                                                                         │
//! │  Implementations:                                                      │
//! │  • store::memory   - RwLock-guarded vectors (tests, dev)               │
//! │  • catalog-db      - SQLite via sqlx                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not-Found Semantics
//! Lookups that need a row (`get_by_id`, `update`, `delete`, and the option
//! equivalents) fail with [`StoreError::NotFound`] naming the entity that was
//! missing. The orchestrators turn that into the matching `CoreError` kind.

pub mod memory;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::types::{Product, ProductOption};

// =============================================================================
// Store Error
// =============================================================================

/// Which kind of row a store failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Product,
    Option,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Product => write!(f, "Product"),
            Entity::Option => write!(f, "Option"),
        }
    }
}

/// Errors raised by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the lookup.
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: Uuid },

    /// Any other persistence failure. Opaque to the orchestrators.
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity and id.
    pub fn not_found(entity: Entity, id: Uuid) -> Self {
        StoreError::NotFound { entity, id }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Product Store
// =============================================================================

/// Persistence gateway for Product rows.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Returns every product.
    async fn get_all(&self) -> StoreResult<Vec<Product>>;

    /// Returns products whose name contains `text`, ignoring case.
    async fn get_by_name(&self, text: &str) -> StoreResult<Vec<Product>>;

    /// Returns the product with `id`, or `NotFound`.
    async fn get_by_id(&self, id: Uuid) -> StoreResult<Product>;

    /// Read-only existence probe.
    async fn exists(&self, id: Uuid) -> StoreResult<bool>;

    /// Persists `product` under a freshly generated id and returns it.
    async fn create(&self, product: Product) -> StoreResult<Product>;

    /// Overwrites name, description, price and delivery price of the row
    /// located by `product.id`. The row id never changes.
    async fn update(&self, product: Product) -> StoreResult<Product>;

    /// Hard-deletes the row and returns its last snapshot.
    async fn delete(&self, id: Uuid) -> StoreResult<Product>;

    /// Liveness probe used by health checks.
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

// =============================================================================
// Option Store
// =============================================================================

/// Persistence gateway for ProductOption rows, keyed by owning product.
#[async_trait]
pub trait OptionStore: Send + Sync {
    /// Returns all options whose `product_id` is `product_id`.
    async fn get_all_for_product(&self, product_id: Uuid) -> StoreResult<Vec<ProductOption>>;

    /// Returns the option matching BOTH ids, or `NotFound`.
    async fn get_by_product_and_id(
        &self,
        product_id: Uuid,
        option_id: Uuid,
    ) -> StoreResult<ProductOption>;

    /// Global existence probe. Deliberately not scoped by product.
    async fn exists_by_id(&self, option_id: Uuid) -> StoreResult<bool>;

    /// Persists `option` as given (ids already assigned by the caller).
    async fn create(&self, option: ProductOption) -> StoreResult<ProductOption>;

    /// Locates the row by (`product_id`, `id`) and overwrites name/description.
    async fn update(&self, option: ProductOption) -> StoreResult<ProductOption>;

    /// Hard-deletes the row matching both ids and returns its last snapshot.
    async fn delete_by_product_and_id(
        &self,
        product_id: Uuid,
        option_id: Uuid,
    ) -> StoreResult<ProductOption>;
}
