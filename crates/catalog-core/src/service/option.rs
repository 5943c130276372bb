//! # Option Orchestrator
//!
//! Thin seam over [`OptionStore`]. It exists so `ProductOrchestrator` never
//! talks to option storage directly; it adds no invariant logic of its own.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::CoreResult;
use crate::store::OptionStore;
use crate::types::ProductOption;

/// Delegates option operations to an injected store.
#[derive(Clone)]
pub struct OptionOrchestrator {
    store: Arc<dyn OptionStore>,
}

impl OptionOrchestrator {
    /// Creates an orchestrator over the given store.
    pub fn new(store: Arc<dyn OptionStore>) -> Self {
        OptionOrchestrator { store }
    }

    pub async fn get_all_for_product(&self, product_id: Uuid) -> CoreResult<Vec<ProductOption>> {
        Ok(self.store.get_all_for_product(product_id).await?)
    }

    pub async fn get_by_product_and_id(
        &self,
        product_id: Uuid,
        option_id: Uuid,
    ) -> CoreResult<ProductOption> {
        Ok(self
            .store
            .get_by_product_and_id(product_id, option_id)
            .await?)
    }

    /// Global probe: true if any product owns an option with this id.
    pub async fn exists_by_id(&self, option_id: Uuid) -> CoreResult<bool> {
        Ok(self.store.exists_by_id(option_id).await?)
    }

    pub async fn create(&self, option: ProductOption) -> CoreResult<ProductOption> {
        Ok(self.store.create(option).await?)
    }

    pub async fn update(&self, option: ProductOption) -> CoreResult<ProductOption> {
        Ok(self.store.update(option).await?)
    }

    pub async fn delete_by_product_and_id(
        &self,
        product_id: Uuid,
        option_id: Uuid,
    ) -> CoreResult<ProductOption> {
        Ok(self
            .store
            .delete_by_product_and_id(product_id, option_id)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::store::memory::InMemoryOptionStore;

    #[tokio::test]
    async fn test_passes_through_to_store() {
        let store = Arc::new(InMemoryOptionStore::new());
        let orchestrator = OptionOrchestrator::new(store.clone());
        let product_id = Uuid::new_v4();
        let option = ProductOption::new("Rose Gold", None).with_ids(product_id, Uuid::new_v4());

        let created = orchestrator.create(option.clone()).await.unwrap();
        assert_eq!(created, option);
        assert!(orchestrator.exists_by_id(option.id).await.unwrap());
        assert_eq!(
            orchestrator.get_all_for_product(product_id).await.unwrap(),
            vec![option.clone()]
        );

        let deleted = orchestrator
            .delete_by_product_and_id(product_id, option.id)
            .await
            .unwrap();
        assert_eq!(deleted, option);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_missing_row_surfaces_as_option_not_found() {
        let orchestrator = OptionOrchestrator::new(Arc::new(InMemoryOptionStore::new()));
        let missing = Uuid::new_v4();

        let err = orchestrator
            .get_by_product_and_id(Uuid::new_v4(), missing)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::OptionNotFound { id } if id == missing));
    }
}
