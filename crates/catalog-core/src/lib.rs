//! # catalog-core: Pure Domain Logic for the Catalog Service
//!
//! This crate is the **heart** of the catalog service. It owns the Product and
//! ProductOption types, the validation rules applied at the boundary, and the
//! orchestration that keeps every option tied to an existing product.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Service Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog-api (axum)                           │   │
//! │  │    validation ──► orchestrator call ──► ErrorTranslator         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌───────────┐  ┌─────────┐  │   │
//! │  │   │   types   │  │   service    │  │   store   │  │validation│ │   │
//! │  │   │  Product  │  │ ProductOrch. │  │ contracts │  │  rules  │  │   │
//! │  │   │  Option   │  │ OptionOrch.  │  │ in-memory │  │         │  │   │
//! │  │   └───────────┘  └──────────────┘  └───────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO DATABASE • NO NETWORK • STORES ARE INJECTED                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 catalog-db (SQLite repositories)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductOption)
//! - [`error`] - Domain error types
//! - [`validation`] - Field rules checked before the orchestrator runs
//! - [`store`] - Persistence contracts and the in-memory implementation
//! - [`service`] - `OptionOrchestrator` and `ProductOrchestrator`
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use catalog_core::service::ProductOrchestrator;
//! use catalog_core::store::memory::{InMemoryOptionStore, InMemoryProductStore};
//!
//! let orchestrator = ProductOrchestrator::new(
//!     Arc::new(InMemoryProductStore::new()),
//!     Arc::new(InMemoryOptionStore::new()),
//! );
//! # let _ = orchestrator;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use service::{OptionOrchestrator, ProductOrchestrator};
pub use store::{Entity, OptionStore, ProductStore, StoreError, StoreResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product or option name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a product or option description.
pub const MAX_DESCRIPTION_LEN: usize = 500;
