//! # In-Memory Stores
//!
//! `ProductStore` and `OptionStore` backed by `RwLock<Vec<_>>`.
//!
//! Rows are kept in insertion order, so listings are stable across calls.
//! No lock is held across an `.await`. Used by the orchestrator tests, the
//! HTTP tests, and `CATALOG_STORE=memory` deployments.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::{Entity, OptionStore, ProductStore, StoreError, StoreResult};
use crate::types::{Product, ProductOption};

fn read<T>(lock: &RwLock<T>) -> StoreResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| StoreError::Backend("in-memory store lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> StoreResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| StoreError::Backend("in-memory store lock poisoned".to_string()))
}

// =============================================================================
// Products
// =============================================================================

/// In-memory product table.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    rows: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }

    /// True when no products are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get_all(&self) -> StoreResult<Vec<Product>> {
        Ok(read(&self.rows)?.clone())
    }

    async fn get_by_name(&self, text: &str) -> StoreResult<Vec<Product>> {
        debug!(query = %text, "Filtering products by name");

        Ok(read(&self.rows)?
            .iter()
            .filter(|p| p.name_contains(text))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> StoreResult<Product> {
        read(&self.rows)?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(Entity::Product, id))
    }

    async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        Ok(read(&self.rows)?.iter().any(|p| p.id == id))
    }

    async fn create(&self, product: Product) -> StoreResult<Product> {
        let product = product.with_id(Uuid::new_v4());
        debug!(id = %product.id, "Inserting product");

        write(&self.rows)?.push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> StoreResult<Product> {
        debug!(id = %product.id, "Updating product");

        let mut rows = write(&self.rows)?;
        let row = rows
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| StoreError::not_found(Entity::Product, product.id))?;

        row.name = product.name;
        row.description = product.description;
        row.price = product.price;
        row.delivery_price = product.delivery_price;

        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<Product> {
        debug!(id = %id, "Deleting product");

        let mut rows = write(&self.rows)?;
        let index = rows
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(Entity::Product, id))?;

        Ok(rows.remove(index))
    }
}

// =============================================================================
// Options
// =============================================================================

/// In-memory option table. Holds no reference to the product table.
#[derive(Debug, Default)]
pub struct InMemoryOptionStore {
    rows: RwLock<Vec<ProductOption>>,
}

impl InMemoryOptionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored options across all products.
    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }

    /// True when no options are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OptionStore for InMemoryOptionStore {
    async fn get_all_for_product(&self, product_id: Uuid) -> StoreResult<Vec<ProductOption>> {
        Ok(read(&self.rows)?
            .iter()
            .filter(|o| o.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn get_by_product_and_id(
        &self,
        product_id: Uuid,
        option_id: Uuid,
    ) -> StoreResult<ProductOption> {
        read(&self.rows)?
            .iter()
            .find(|o| o.product_id == product_id && o.id == option_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(Entity::Option, option_id))
    }

    async fn exists_by_id(&self, option_id: Uuid) -> StoreResult<bool> {
        Ok(read(&self.rows)?.iter().any(|o| o.id == option_id))
    }

    async fn create(&self, option: ProductOption) -> StoreResult<ProductOption> {
        debug!(id = %option.id, product_id = %option.product_id, "Inserting option");

        write(&self.rows)?.push(option.clone());
        Ok(option)
    }

    async fn update(&self, option: ProductOption) -> StoreResult<ProductOption> {
        debug!(id = %option.id, product_id = %option.product_id, "Updating option");

        let mut rows = write(&self.rows)?;
        let row = rows
            .iter_mut()
            .find(|o| o.product_id == option.product_id && o.id == option.id)
            .ok_or_else(|| StoreError::not_found(Entity::Option, option.id))?;

        row.name = option.name;
        row.description = option.description;

        Ok(row.clone())
    }

    async fn delete_by_product_and_id(
        &self,
        product_id: Uuid,
        option_id: Uuid,
    ) -> StoreResult<ProductOption> {
        debug!(id = %option_id, product_id = %product_id, "Deleting option");

        let mut rows = write(&self.rows)?;
        let index = rows
            .iter()
            .position(|o| o.product_id == product_id && o.id == option_id)
            .ok_or_else(|| StoreError::not_found(Entity::Option, option_id))?;

        Ok(rows.remove(index))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
