//! # Option Repository
//!
//! Database operations for product options.
//!
//! Every read and write is keyed by `(product_id, id)` except
//! [`OptionRepository::exists`], which probes by option id alone.

use async_trait::async_trait;
use catalog_core::store::{Entity, OptionStore, StoreResult};
use catalog_core::ProductOption;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use super::parse_uuid;
use crate::error::{DbError, DbResult};

/// Row shape of the `product_options` table.
#[derive(Debug, sqlx::FromRow)]
struct OptionRecord {
    id: String,
    product_id: String,
    name: String,
    description: Option<String>,
}

impl TryFrom<OptionRecord> for ProductOption {
    type Error = DbError;

    fn try_from(row: OptionRecord) -> DbResult<Self> {
        Ok(ProductOption {
            id: parse_uuid("product_options.id", &row.id)?,
            product_id: parse_uuid("product_options.product_id", &row.product_id)?,
            name: row.name,
            description: row.description,
        })
    }
}

/// Repository for option database operations.
#[derive(Debug, Clone)]
pub struct OptionRepository {
    pool: SqlitePool,
}

impl OptionRepository {
    /// Creates a new OptionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OptionRepository { pool }
    }

    /// Lists the options of one product in insertion order.
    pub async fn list_for_product(&self, product_id: Uuid) -> DbResult<Vec<ProductOption>> {
        let rows = sqlx::query_as::<_, OptionRecord>(
            r#"
            SELECT id, product_id, name, description
            FROM product_options
            WHERE product_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(product_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProductOption::try_from).collect()
    }

    /// Gets the option matching both ids.
    pub async fn find(&self, product_id: Uuid, option_id: Uuid) -> DbResult<Option<ProductOption>> {
        let row = sqlx::query_as::<_, OptionRecord>(
            r#"
            SELECT id, product_id, name, description
            FROM product_options
            WHERE product_id = ?1 AND id = ?2
            "#,
        )
        .bind(product_id.to_string())
        .bind(option_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProductOption::try_from).transpose()
    }

    /// True if any product owns an option with this id.
    pub async fn exists(&self, option_id: Uuid) -> DbResult<bool> {
        let found: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM product_options WHERE id = ?1)")
                .bind(option_id.to_string())
                .fetch_one(&self.pool)
                .await?;

        Ok(found)
    }

    /// Inserts `option` with the ids it already carries.
    pub async fn insert(&self, option: &ProductOption) -> DbResult<ProductOption> {
        debug!(id = %option.id, product_id = %option.product_id, "Inserting option");

        sqlx::query(
            r#"
            INSERT INTO product_options (id, product_id, name, description)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(option.id.to_string())
        .bind(option.product_id.to_string())
        .bind(&option.name)
        .bind(&option.description)
        .execute(&self.pool)
        .await?;

        Ok(option.clone())
    }

    /// Overwrites name and description of the row at `(product_id, id)`.
    pub async fn update(&self, option: &ProductOption) -> DbResult<ProductOption> {
        debug!(id = %option.id, product_id = %option.product_id, "Updating option");

        let result = sqlx::query(
            r#"
            UPDATE product_options
            SET name = ?3, description = ?4
            WHERE product_id = ?1 AND id = ?2
            "#,
        )
        .bind(option.product_id.to_string())
        .bind(option.id.to_string())
        .bind(&option.name)
        .bind(&option.description)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Entity::Option, option.id));
        }

        Ok(option.clone())
    }

    /// Deletes the row matching both ids and returns its last snapshot.
    pub async fn delete(&self, product_id: Uuid, option_id: Uuid) -> DbResult<ProductOption> {
        debug!(id = %option_id, product_id = %product_id, "Deleting option");

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, OptionRecord>(
            r#"
            SELECT id, product_id, name, description
            FROM product_options
            WHERE product_id = ?1 AND id = ?2
            "#,
        )
        .bind(product_id.to_string())
        .bind(option_id.to_string())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found(Entity::Option, option_id))?;

        sqlx::query("DELETE FROM product_options WHERE product_id = ?1 AND id = ?2")
            .bind(product_id.to_string())
            .bind(option_id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        ProductOption::try_from(row)
    }

    /// Total number of options across all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_options")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl OptionStore for OptionRepository {
    async fn get_all_for_product(&self, product_id: Uuid) -> StoreResult<Vec<ProductOption>> {
        Ok(self.list_for_product(product_id).await?)
    }

    async fn get_by_product_and_id(
        &self,
        product_id: Uuid,
        option_id: Uuid,
    ) -> StoreResult<ProductOption> {
        self.find(product_id, option_id)
            .await?
            .ok_or_else(|| DbError::not_found(Entity::Option, option_id).into())
    }

    async fn exists_by_id(&self, option_id: Uuid) -> StoreResult<bool> {
        Ok(self.exists(option_id).await?)
    }

    async fn create(&self, option: ProductOption) -> StoreResult<ProductOption> {
        Ok(self.insert(&option).await?)
    }

    async fn update(&self, option: ProductOption) -> StoreResult<ProductOption> {
        Ok(OptionRepository::update(self, &option).await?)
    }

    async fn delete_by_product_and_id(
        &self,
        product_id: Uuid,
        option_id: Uuid,
    ) -> StoreResult<ProductOption> {
        Ok(self.delete(product_id, option_id).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use catalog_core::store::StoreError;

    async fn repo() -> OptionRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().options()
    }

    fn option(product_id: Uuid, name: &str) -> ProductOption {
        ProductOption::new(name, None).with_ids(product_id, Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_insert_and_list_scoped_to_product() {
        let repo = repo().await;
        let owner = Uuid::new_v4();
        let white = repo.insert(&option(owner, "White")).await.unwrap();
        let black = repo.insert(&option(owner, "Black")).await.unwrap();
        repo.insert(&option(Uuid::new_v4(), "Gold")).await.unwrap();

        assert_eq!(repo.list_for_product(owner).await.unwrap(), vec![white, black]);
        assert!(repo.list_for_product(Uuid::new_v4()).await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_option_may_reference_missing_product() {
        // No foreign key on product_id
        let repo = repo().await;
        let orphan = repo.insert(&option(Uuid::new_v4(), "Orphan")).await.unwrap();

        assert!(repo.exists(orphan.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_is_global_but_find_is_scoped() {
        let repo = repo().await;
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let white = repo.insert(&option(owner, "White")).await.unwrap();

        assert!(repo.exists(white.id).await.unwrap());
        assert_eq!(repo.find(owner, white.id).await.unwrap(), Some(white.clone()));
        assert_eq!(repo.find(stranger, white.id).await.unwrap(), None);

        assert!(matches!(
            OptionStore::get_by_product_and_id(&repo, stranger, white.id).await,
            Err(StoreError::NotFound { entity: Entity::Option, .. })
        ));
    }

    #[tokio::test]
    async fn test_update_is_scoped_by_product() {
        let repo = repo().await;
        let owner = Uuid::new_v4();
        let white = repo.insert(&option(owner, "White")).await.unwrap();

        let hijack = ProductOption::new("Hijacked", None).with_ids(Uuid::new_v4(), white.id);
        assert!(matches!(
            repo.update(&hijack).await,
            Err(DbError::NotFound { entity: Entity::Option, .. })
        ));

        let renamed = ProductOption::new("Black", Some("Matte".to_string())).with_ids(owner, white.id);
        repo.update(&renamed).await.unwrap();
        assert_eq!(repo.find(owner, white.id).await.unwrap(), Some(renamed));
    }

    #[tokio::test]
    async fn test_delete_returns_snapshot_then_not_found() {
        let repo = repo().await;
        let owner = Uuid::new_v4();
        let white = repo.insert(&option(owner, "White")).await.unwrap();

        assert_eq!(repo.delete(owner, white.id).await.unwrap(), white);
        assert!(!repo.exists(white.id).await.unwrap());
        assert!(matches!(
            OptionStore::delete_by_product_and_id(&repo, owner, white.id).await,
            Err(StoreError::NotFound { entity: Entity::Option, .. })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_id_is_unique_violation() {
        let repo = repo().await;
        let white = repo.insert(&option(Uuid::new_v4(), "White")).await.unwrap();

        assert!(matches!(
            repo.insert(&white).await,
            Err(DbError::UniqueViolation { .. })
        ));
    }
}
