//! # Catalog Database Handle
//!
//! Opens the SQLite pool behind the catalog stores and hands out the two
//! repositories that share it.
//!
//! ```text
//!  CATALOG_DB_PATH=./catalog.db ──► file, WAL, pool of N, recycled after 30 min
//!  CATALOG_DB_PATH=:memory:     ──► one pinned connection, never recycled
//!                                       │
//!                                       ▼
//!                           embedded migrations (001_initial_schema)
//!                                       │
//!                       ┌───────────────┴───────────────┐
//!                       ▼                               ▼
//!               db.products()                     db.options()
//!            impl ProductStore                  impl OptionStore
//! ```

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::option::OptionRepository;
use crate::repository::product::ProductRepository;

const IN_MEMORY_PATH: &str = ":memory:";
const MAX_CONNECTION_LIFETIME: Duration = Duration::from_secs(30 * 60);

// =============================================================================
// Configuration
// =============================================================================

/// Where the catalog lives and how wide its pool is.
///
/// ```rust
/// use catalog_db::DbConfig;
///
/// let config = DbConfig::new("./catalog.db").max_connections(8);
/// assert_eq!(config.max_connections, 8);
/// assert!(!config.is_in_memory());
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_path: PathBuf,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// `None` keeps idle connections open for the life of the pool.
    pub idle_timeout: Option<Duration>,
}

impl DbConfig {
    /// A file-backed catalog. The file is created on first open.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// A private in-memory catalog.
    ///
    /// Every SQLite in-memory connection is a separate database, so the pool
    /// is pinned to a single connection that never idles out.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: None,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == IN_MEMORY_PATH
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        if self.is_in_memory() {
            return SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()));
        }

        let url = format!("sqlite://{}?mode=rwc", self.database_path.display());
        Ok(SqliteConnectOptions::from_str(&url)
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Open catalog database. Clones share the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool and brings the schema up to date.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(path = %config.database_path.display(), "Opening catalog database");

        let max_lifetime = (!config.is_in_memory()).then_some(MAX_CONNECTION_LIFETIME);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(max_lifetime)
            .connect_with(config.connect_options()?)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        migrations::run_migrations(&pool).await?;

        info!(max_connections = config.max_connections, "Catalog database ready");
        Ok(Database { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    pub fn options(&self) -> OptionRepository {
        OptionRepository::new(self.pool.clone())
    }

    /// Closes the pool. Repository calls fail afterwards.
    pub async fn close(&self) {
        info!("Closing catalog database");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::store::ProductStore;

    #[tokio::test]
    async fn test_in_memory_database_is_migrated() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let (total, applied) = migrations::migration_status(db.pool()).await.unwrap();
        assert_eq!(total, applied);
        assert!(total >= 1);
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_repositories_share_one_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let product = catalog_core::Product::new(
            "Shared",
            None,
            rust_decimal::Decimal::ONE,
            rust_decimal::Decimal::ZERO,
        );

        let created = db.products().insert(&product).await.unwrap();

        assert!(db.clone().products().exists(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_closed_pool_fails_ping() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let products = db.products();
        assert!(products.ping().await.is_ok());

        db.close().await;

        assert!(products.ping().await.is_err());
    }

    #[test]
    fn test_config() {
        let config = DbConfig::new("/tmp/catalog.db").max_connections(10);
        assert_eq!(config.max_connections, 10);
        assert!(!config.is_in_memory());

        let memory = DbConfig::in_memory();
        assert!(memory.is_in_memory());
        assert_eq!(memory.max_connections, 1);
        assert_eq!(memory.idle_timeout, None);
    }
}
