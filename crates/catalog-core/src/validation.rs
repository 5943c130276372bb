//! # Validation Module
//!
//! Field rules for products and options.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractors (catalog-api)                                │
//! │  ├── Path ids parse as UUIDs                                           │
//! │  └── Body parses as JSON                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (called by catalog-api before the orchestrator)  │
//! │  ├── name required, ≤ 100 chars                                        │
//! │  ├── description ≤ 500 chars                                           │
//! │  ├── price > 0                                                         │
//! │  └── delivery price ≥ 0                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ProductOrchestrator                                          │
//! │  └── Existence checks (product, then option)                           │
//! │                                                                         │
//! │  A request that fails here never reaches the orchestrator.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_price, validate_delivery_price};
//! use rust_decimal::Decimal;
//!
//! assert!(validate_price(Decimal::ONE).is_ok());
//! assert!(validate_price(Decimal::ZERO).is_err());
//! assert!(validate_delivery_price(Decimal::ZERO).is_ok());
//! ```

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::types::{Product, ProductOption};
use crate::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product or option name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Must be at most 100 characters, counting any surrounding whitespace
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an optional description (at most 500 characters).
pub fn validate_description(description: Option<&str>) -> ValidationResult<()> {
    match description {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        }),
        _ => Ok(()),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be strictly greater than zero (no free products)
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_price;
/// use rust_decimal::Decimal;
///
/// assert!(validate_price(Decimal::new(1099, 2)).is_ok()); // 10.99
/// assert!(validate_price(Decimal::ZERO).is_err());
/// assert!(validate_price(Decimal::NEGATIVE_ONE).is_err());
/// ```
pub fn validate_price(price: Decimal) -> ValidationResult<()> {
    if price <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a delivery price.
///
/// ## Rules
/// - Must be zero or greater (free delivery is allowed)
pub fn validate_delivery_price(delivery_price: Decimal) -> ValidationResult<()> {
    if delivery_price < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "deliveryPrice".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates every field of a product. Stops at the first failure.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_name(&product.name)?;
    validate_description(product.description.as_deref())?;
    validate_price(product.price)?;
    validate_delivery_price(product.delivery_price)?;
    Ok(())
}

/// Validates the caller-editable fields of an option.
pub fn validate_option(option: &ProductOption) -> ValidationResult<()> {
    validate_name(&option.name)?;
    validate_description(option.description.as_deref())?;
    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Parses an identifier taken from a route.
///
/// ## Example
/// ```rust
/// use catalog_core::validation::parse_id;
///
/// assert!(parse_id("id", "550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(parse_id("id", "not-a-uuid").is_err());
/// ```
pub fn parse_id(field: &str, raw: &str) -> ValidationResult<Uuid> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a valid UUID".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
