//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors                                                   │
//! │  ├── ValidationError  - Input rejected at the boundary (this file)     │
//! │  ├── StoreError       - Persistence failures (store module)            │
//! │  └── CoreError        - What the orchestrators return (this file)      │
//! │                                                                         │
//! │  catalog-db errors (separate crate)                                    │
//! │  └── DbError          - sqlx failures, converted into StoreError       │
//! │                                                                         │
//! │  catalog-api errors (app)                                              │
//! │  └── ApiError         - What HTTP clients see (status + code + message)│
//! │                                                                         │
//! │  Flow: DbError → StoreError → CoreError → ApiError → client            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not-Found Is a Value
//! `ProductNotFound` and `OptionNotFound` are ordinary enum variants. Callers
//! get them back in a `Result` and must match on them; nothing is thrown.

use thiserror::Error;
use uuid::Uuid;

use crate::store::{Entity, StoreError};

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the orchestrators.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product row exists for the supplied product id.
    ///
    /// ## When This Occurs
    /// - The existence check before an update or any option operation failed
    /// - `get_by_id` / `delete` hit an absent row
    #[error("Product was not found.")]
    ProductNotFound { id: Uuid },

    /// No option row exists for the supplied option id.
    ///
    /// ## When This Occurs
    /// - The global existence probe failed (get/update option)
    /// - The option exists but belongs to a different product, so the
    ///   product-scoped lookup found nothing
    #[error("Option was not found.")]
    OptionNotFound { id: Uuid },

    /// Input failed field rules. Normally caught at the boundary before the
    /// orchestrator runs.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Any other persistence failure, passed through unmodified.
    #[error("Store failure: {0}")]
    Store(StoreError),
}

impl CoreError {
    /// Returns true for the two typed not-found kinds.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::ProductNotFound { .. } | CoreError::OptionNotFound { .. }
        )
    }
}

/// A store's "no matching row" becomes the matching domain kind; everything
/// else stays a store failure.
impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound {
                entity: Entity::Product,
                id,
            } => CoreError::ProductNotFound { id },
            StoreError::NotFound {
                entity: Entity::Option,
                id,
            } => CoreError::OptionNotFound { id },
            other => CoreError::Store(other),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet field constraints.
/// They are produced before delegation to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., invalid UUID, malformed body).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = CoreError::ProductNotFound { id: Uuid::new_v4() };
        assert_eq!(err.to_string(), "Product was not found.");

        let err = CoreError::OptionNotFound { id: Uuid::new_v4() };
        assert_eq!(err.to_string(), "Option was not found.");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be greater than 0");
    }

    #[test]
    fn test_store_not_found_maps_to_domain_kind() {
        let id = Uuid::new_v4();

        let err: CoreError = StoreError::not_found(Entity::Product, id).into();
        assert!(matches!(err, CoreError::ProductNotFound { id: got } if got == id));

        let err: CoreError = StoreError::not_found(Entity::Option, id).into();
        assert!(matches!(err, CoreError::OptionNotFound { id: got } if got == id));
    }

    #[test]
    fn test_backend_failure_stays_opaque() {
        let err: CoreError = StoreError::Backend("disk full".to_string()).into();
        assert!(matches!(err, CoreError::Store(StoreError::Backend(_))));
        assert!(!err.is_not_found());
    }
}
