//! # Product Orchestrator
//!
//! The top-level service. Options have no storage-enforced link to their
//! product, so this type is the only thing keeping the two consistent.
//!
//! ## Check Sequencing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Option operation on /products/{p}/options/{o}          │
//! │                                                                         │
//! │  1. ProductStore::exists(p)                                            │
//! │        │                                                                │
//! │        ├── false ──► ProductNotFound   (wins when both are missing)    │
//! │        ▼                                                                │
//! │  2. OptionStore::exists_by_id(o)       (get/update only, GLOBAL probe) │
//! │        │                                                                │
//! │        ├── false ──► OptionNotFound                                    │
//! │        ▼                                                                │
//! │  3. Store call keyed by (p, o)                                         │
//! │        │                                                                │
//! │        ├── no row ──► OptionNotFound   (o exists under another product)│
//! │        ▼                                                                │
//! │     Ok(option)                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Step 2 does not prove that `o` belongs to `p`; step 3 does. Passing the
//! global probe is necessary but not sufficient.
//!
//! ## Path Ids Win
//! When a mutation carries both a route id and a body id for the same field,
//! the body value is overwritten before the store sees it.
//!
//! ## Not Atomic
//! The existence check and the dependent call are two separate store calls.
//! A concurrent delete can land in between (check-then-act); nothing here
//! serializes callers.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use super::OptionOrchestrator;
use crate::error::{CoreError, CoreResult};
use crate::store::{OptionStore, ProductStore};
use crate::types::{Product, ProductOption};

/// Enforces product/option existence before delegating to storage.
///
/// Stateless between calls; cheap to clone and share across request handlers.
#[derive(Clone)]
pub struct ProductOrchestrator {
    products: Arc<dyn ProductStore>,
    options: OptionOrchestrator,
}

impl ProductOrchestrator {
    /// Creates an orchestrator over the given stores.
    pub fn new(products: Arc<dyn ProductStore>, options: Arc<dyn OptionStore>) -> Self {
        ProductOrchestrator {
            products,
            options: OptionOrchestrator::new(options),
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub async fn list_all(&self) -> CoreResult<Vec<Product>> {
        debug!("Listing all products");
        Ok(self.products.get_all().await?)
    }

    /// Case-insensitive substring match over product names.
    pub async fn list_by_name(&self, text: &str) -> CoreResult<Vec<Product>> {
        debug!(query = %text, "Listing products by name");
        Ok(self.products.get_by_name(text).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> CoreResult<Product> {
        debug!(id = %id, "Fetching product");
        Ok(self.products.get_by_id(id).await?)
    }

    /// Persists a product under a fresh id. Input must already be validated.
    pub async fn create(&self, product: Product) -> CoreResult<Product> {
        debug!(name = %product.name, "Creating product");
        Ok(self.products.create(product).await?)
    }

    /// Overwrites the product at `id`. Any id in the payload is replaced by `id`.
    pub async fn update(&self, id: Uuid, product: Product) -> CoreResult<Product> {
        debug!(id = %id, "Updating product");
        self.ensure_product_exists(id).await?;

        Ok(self.products.update(product.with_id(id)).await?)
    }

    /// Hard-deletes the product. Its options are left untouched.
    pub async fn delete(&self, id: Uuid) -> CoreResult<Product> {
        debug!(id = %id, "Deleting product");
        Ok(self.products.delete(id).await?)
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Options of an existing product. An empty list is not an error.
    pub async fn list_options(&self, product_id: Uuid) -> CoreResult<Vec<ProductOption>> {
        debug!(product_id = %product_id, "Listing options");
        self.ensure_product_exists(product_id).await?;

        self.options.get_all_for_product(product_id).await
    }

    pub async fn get_option(&self, product_id: Uuid, option_id: Uuid) -> CoreResult<ProductOption> {
        debug!(product_id = %product_id, option_id = %option_id, "Fetching option");
        self.ensure_product_exists(product_id).await?;
        self.ensure_option_exists(option_id).await?;

        self.options
            .get_by_product_and_id(product_id, option_id)
            .await
    }

    /// Creates an option under `product_id` with a freshly generated id.
    /// Caller-supplied `id` and `product_id` are ignored.
    pub async fn create_option(
        &self,
        product_id: Uuid,
        option: ProductOption,
    ) -> CoreResult<ProductOption> {
        debug!(product_id = %product_id, "Creating option");
        self.ensure_product_exists(product_id).await?;

        let option = option.with_ids(product_id, Uuid::new_v4());
        self.options.create(option).await
    }

    /// Updates name/description of `option_id` under `product_id`.
    /// The returned option always carries the path ids.
    pub async fn update_option(
        &self,
        product_id: Uuid,
        option_id: Uuid,
        option: ProductOption,
    ) -> CoreResult<ProductOption> {
        debug!(product_id = %product_id, option_id = %option_id, "Updating option");
        self.ensure_product_exists(product_id).await?;
        self.ensure_option_exists(option_id).await?;

        let option = option.with_ids(product_id, option_id);
        self.options.update(option).await
    }

    pub async fn delete_option(
        &self,
        product_id: Uuid,
        option_id: Uuid,
    ) -> CoreResult<ProductOption> {
        debug!(product_id = %product_id, option_id = %option_id, "Deleting option");
        self.ensure_product_exists(product_id).await?;

        self.options
            .delete_by_product_and_id(product_id, option_id)
            .await
    }

    /// Store liveness, for health endpoints.
    pub async fn ping(&self) -> CoreResult<()> {
        Ok(self.products.ping().await?)
    }

    // =========================================================================
    // Existence checks
    // =========================================================================

    async fn ensure_product_exists(&self, id: Uuid) -> CoreResult<()> {
        if !self.products.exists(id).await? {
            warn!(product_id = %id, "Product existence check failed");
            return Err(CoreError::ProductNotFound { id });
        }
        Ok(())
    }

    async fn ensure_option_exists(&self, id: Uuid) -> CoreResult<()> {
        if !self.options.exists_by_id(id).await? {
            warn!(option_id = %id, "Option existence check failed");
            return Err(CoreError::OptionNotFound { id });
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
