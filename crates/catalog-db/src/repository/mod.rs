//! # Repository Module
//!
//! SQLite implementations of the catalog-core store contracts.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repositories and Store Traits                        │
//! │                                                                         │
//! │  ProductOrchestrator                                                   │
//! │       │  Arc<dyn ProductStore>        Arc<dyn OptionStore>              │
//! │       ▼                                     ▼                           │
//! │  ProductRepository                    OptionRepository                 │
//! │  ├── list_all / search_by_name        ├── list_for_product             │
//! │  ├── find_by_id / exists              ├── find / exists                │
//! │  ├── insert / update / delete         ├── insert / update / delete     │
//! │  └── count                            └── count                        │
//! │       │                                     │                           │
//! │       │  SQL (query_as::<_, Record>)        │                           │
//! │       ▼                                     ▼                           │
//! │  products                             product_options                  │
//! │                                                                         │
//! │  Each repository exposes inherent methods returning DbResult and       │
//! │  implements the store trait on top of them.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - products table
//! - [`OptionRepository`](option::OptionRepository) - product_options table

pub mod option;
pub mod product;

use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{DbError, DbResult};

/// Parses a TEXT id column.
pub(crate) fn parse_uuid(column: &'static str, raw: &str) -> DbResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| DbError::corrupt(column, raw))
}

/// Parses a TEXT decimal column.
pub(crate) fn parse_decimal(column: &'static str, raw: &str) -> DbResult<Decimal> {
    Decimal::from_str(raw).map_err(|_| DbError::corrupt(column, raw))
}
