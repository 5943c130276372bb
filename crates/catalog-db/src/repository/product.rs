//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Name Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Name Search Works                                │
//! │                                                                         │
//! │  GET /products?name=éclair                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT ... FROM products ORDER BY rowid                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Product::name_contains (Unicode case folding, in Rust)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ ÉCLAIR au chocolat  │    4.50 │  0.00  │ ← MATCH                    │
//! │  │ Samsung Galaxy S7   │ 1024.99 │ 16.99  │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │                                                                         │
//! │  SQLite lower() folds ASCII only, so matching stays out of SQL.        │
//! │  '%' and '_' in the query are plain text.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use catalog_core::store::{Entity, ProductStore, StoreResult};
use catalog_core::Product;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use super::{parse_decimal, parse_uuid};
use crate::error::{DbError, DbResult};

/// Row shape of the `products` table.
#[derive(Debug, sqlx::FromRow)]
struct ProductRecord {
    id: String,
    name: String,
    description: Option<String>,
    price: String,
    delivery_price: String,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DbError;

    fn try_from(row: ProductRecord) -> DbResult<Self> {
        Ok(Product {
            id: parse_uuid("products.id", &row.id)?,
            name: row.name,
            description: row.description,
            price: parse_decimal("products.price", &row.price)?,
            delivery_price: parse_decimal("products.delivery_price", &row.delivery_price)?,
        })
    }
}

fn into_products(rows: Vec<ProductRecord>) -> DbResult<Vec<Product>> {
    rows.into_iter().map(Product::try_from).collect()
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let created = repo.insert(&Product::new("Phone", None, price, delivery)).await?;
/// let found = repo.search_by_name("pho").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, name, description, price, delivery_price
            FROM products
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        into_products(rows)
    }

    /// Lists products whose name contains `text`, ignoring case.
    ///
    /// Same matching rule as the in-memory store.
    pub async fn search_by_name(&self, text: &str) -> DbResult<Vec<Product>> {
        debug!(query = %text, "Searching products by name");

        let found: Vec<Product> = self
            .list_all()
            .await?
            .into_iter()
            .filter(|product| product.name_contains(text))
            .collect();

        debug!(count = found.len(), "Search returned products");
        Ok(found)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn find_by_id(&self, id: Uuid) -> DbResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, name, description, price, delivery_price
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// True if a row with `id` exists.
    pub async fn exists(&self, id: Uuid) -> DbResult<bool> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = ?1)")
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await?;

        Ok(found)
    }

    /// Inserts `product` under a fresh v4 id. The supplied id is ignored.
    pub async fn insert(&self, product: &Product) -> DbResult<Product> {
        let product = product.clone().with_id(Uuid::new_v4());
        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, delivery_price)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_string())
        .bind(product.delivery_price.to_string())
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    /// Overwrites the mutable columns of the row at `product.id`.
    pub async fn update(&self, product: &Product) -> DbResult<Product> {
        debug!(id = %product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?2, description = ?3, price = ?4, delivery_price = ?5
            WHERE id = ?1
            "#,
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_string())
        .bind(product.delivery_price.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Entity::Product, product.id));
        }

        Ok(product.clone())
    }

    /// Deletes the row and returns its last snapshot. Options are untouched.
    pub async fn delete(&self, id: Uuid) -> DbResult<Product> {
        debug!(id = %id, "Deleting product");

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, name, description, price, delivery_price
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found(Entity::Product, id))?;

        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Product::try_from(row)
    }

    /// Total number of products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn get_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.list_all().await?)
    }

    async fn get_by_name(&self, text: &str) -> StoreResult<Vec<Product>> {
        Ok(self.search_by_name(text).await?)
    }

    async fn get_by_id(&self, id: Uuid) -> StoreResult<Product> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found(Entity::Product, id).into())
    }

    async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        Ok(ProductRepository::exists(self, id).await?)
    }

    async fn create(&self, product: Product) -> StoreResult<Product> {
        Ok(self.insert(&product).await?)
    }

    async fn update(&self, product: Product) -> StoreResult<Product> {
        Ok(ProductRepository::update(self, &product).await?)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<Product> {
        Ok(ProductRepository::delete(self, id).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;
        Ok(())
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
    use rust_decimal::Decimal;
    use std::str::FromStr;

    async fn repo() -> ProductRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().products()
    }

    fn product(name: &str, price: &str) -> Product {
        Product::new(
            name,
            Some(format!("{} description", name)),
            Decimal::from_str(price).unwrap(),
            Decimal::from_str("16.99").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_insert_and_find_preserves_decimals() {
        let repo = repo().await;

        let created = repo.insert(&product("Samsung Galaxy S7", "1024.99")).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(found, created);
        assert_eq!(found.price.to_string(), "1024.99");
        assert_eq!(found.delivery_price.to_string(), "16.99");
    }

    #[tokio::test]
    async fn test_insert_ignores_supplied_id() {
        let repo = repo().await;
        let supplied = Uuid::new_v4();

        let created = repo
            .insert(&product("Phone", "10").with_id(supplied))
            .await
            .unwrap();

        assert_ne!(created.id, supplied);
        assert!(!repo.exists(supplied).await.unwrap());
        assert!(repo.exists(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_all_keeps_insertion_order() {
        let repo = repo().await;
        let a = repo.insert(&product("Zebra", "1")).await.unwrap();
        let b = repo.insert(&product("Apple", "2")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_search_by_name_is_case_insensitive_substring() {
        let repo = repo().await;
        repo.insert(&product("Samsung Galaxy S7", "1024.99")).await.unwrap();
        repo.insert(&product("Apple iPhone 6S", "1299.99")).await.unwrap();

        let found = repo.search_by_name("gAlAxY").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Samsung Galaxy S7");

        assert_eq!(repo.search_by_name("s").await.unwrap().len(), 2);
        assert!(repo.search_by_name("%").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_by_name_folds_non_ascii_case() {
        let repo = repo().await;
        let eclair = repo.insert(&product("ÉCLAIR au chocolat", "4.50")).await.unwrap();
        repo.insert(&product("Samsung Galaxy S7", "1024.99")).await.unwrap();

        assert_eq!(repo.search_by_name("éclair").await.unwrap(), vec![eclair.clone()]);
        assert_eq!(repo.search_by_name("ÉCLAIR").await.unwrap(), vec![eclair]);
        assert!(repo.search_by_name("eclair").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = repo().await;
        let ghost = product("Ghost", "1").with_id(Uuid::new_v4());

        assert!(matches!(
            repo.update(&ghost).await,
            Err(DbError::NotFound { entity: Entity::Product, .. })
        ));
    }

    #[tokio::test]
    async fn test_update_overwrites_columns() {
        let repo = repo().await;
        let created = repo.insert(&product("Old", "1")).await.unwrap();

        let mut changed = product("New", "2.50").with_id(created.id);
        changed.description = None;
        repo.update(&changed).await.unwrap();

        assert_eq!(repo.find_by_id(created.id).await.unwrap().unwrap(), changed);
    }

    #[tokio::test]
    async fn test_delete_returns_snapshot_then_not_found() {
        let repo = repo().await;
        let created = repo.insert(&product("Gone", "1")).await.unwrap();

        assert_eq!(repo.delete(created.id).await.unwrap(), created);
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());

        let err: StoreError = ProductStore::delete(&repo, created.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: Entity::Product, id } if id == created.id));
    }

    #[tokio::test]
    async fn test_store_get_by_id_missing_is_not_found() {
        let repo = repo().await;

        assert!(matches!(
            ProductStore::get_by_id(&repo, Uuid::new_v4()).await,
            Err(StoreError::NotFound { entity: Entity::Product, .. })
        ));
        assert!(repo.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_corrupt_price_is_reported() {
        let repo = repo().await;
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO products (id, name, price, delivery_price) VALUES (?1, 'x', 'abc', '0')")
            .bind(id.to_string())
            .execute(&repo.pool)
            .await
            .unwrap();

        assert!(matches!(
            repo.find_by_id(id).await,
            Err(DbError::CorruptValue { column: "products.price", .. })
        ));
    }
}
