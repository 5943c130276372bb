//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (catalog-core) ← NotFound keeps its entity, rest is opaque │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CoreError → ApiError (catalog-api) → status code + JSON body          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use catalog_core::store::{Entity, StoreError};
use thiserror::Error;
use uuid::Uuid;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// No row matched the lookup.
    ///
    /// ## When This Occurs
    /// - Lookup by id found nothing
    /// - UPDATE / DELETE affected zero rows
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: Uuid },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting an option whose id is already taken
    #[error("Duplicate {field}")]
    UniqueViolation { field: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A stored value could not be read back into a domain type.
    ///
    /// ## When This Occurs
    /// - Row written by hand with a malformed UUID or price
    #[error("Corrupt {column} value: '{value}'")]
    CorruptValue { column: &'static str, value: String },

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity and id.
    pub fn not_found(entity: Entity, id: Uuid) -> Self {
        DbError::NotFound { entity, id }
    }

    /// Creates a CorruptValue error.
    pub fn corrupt(column: &'static str, value: impl Into<String>) -> Self {
        DbError::CorruptValue {
            column,
            value: value.into(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
///
/// `RowNotFound` is not mapped to `NotFound`: repositories use
/// `fetch_optional` and name the missing entity themselves.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // "UNIQUE constraint failed: <table>.<column>"
                if let Some(field) = msg.strip_prefix("UNIQUE constraint failed: ") {
                    DbError::UniqueViolation {
                        field: field.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Hand repository failures to the orchestrators.
impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => StoreError::NotFound { entity, id },
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_entity() {
        let id = Uuid::new_v4();
        let store: StoreError = DbError::not_found(Entity::Option, id).into();

        assert!(matches!(
            store,
            StoreError::NotFound { entity: Entity::Option, id: got } if got == id
        ));
    }

    #[test]
    fn test_other_errors_become_backend() {
        let store: StoreError = DbError::PoolExhausted.into();
        assert!(matches!(store, StoreError::Backend(msg) if msg == "Connection pool exhausted"));

        let store: StoreError = DbError::corrupt("price", "abc").into();
        assert!(matches!(store, StoreError::Backend(_)));
    }

    #[test]
    fn test_pool_closed_maps_to_connection_failed() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
    }
}
