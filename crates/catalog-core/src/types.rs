//! # Domain Types
//!
//! Core domain types used throughout the catalog service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │      Product        │          │   ProductOption     │              │
//! │  │  ─────────────────  │          │  ─────────────────  │              │
//! │  │  id (UUID)          │◄─ ─ ─ ─ ─│  product_id (UUID)  │              │
//! │  │  name               │  back-   │  id (UUID)          │              │
//! │  │  description?       │  ref     │  name               │              │
//! │  │  price              │          │  description?       │              │
//! │  │  delivery_price     │          └─────────────────────┘              │
//! │  └─────────────────────┘                                                │
//! │                                                                         │
//! │  The dashed arrow is NOT a storage constraint. Options do not own      │
//! │  their product and nothing cascades; the orchestrator checks that the  │
//! │  product exists before every option operation.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is a UUID v4 assigned by the store on create. It is never reassigned
//! and never regenerated on update. Inputs built from a request body carry
//! whatever id the caller sent (or [`Uuid::nil`]); the orchestrator overwrites it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Product
// =============================================================================

/// A catalog product with pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    #[ts(as = "String")]
    pub id: Uuid,

    /// Display name, 1..=100 characters.
    pub name: String,

    /// Optional description, at most 500 characters.
    pub description: Option<String>,

    /// Unit price. Must be greater than zero.
    #[ts(as = "String")]
    pub price: Decimal,

    /// Delivery price. Zero or greater.
    #[ts(as = "String")]
    pub delivery_price: Decimal,
}

impl Product {
    /// Creates a product that has not been stored yet (nil id).
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: Decimal,
        delivery_price: Decimal,
    ) -> Self {
        Product {
            id: Uuid::nil(),
            name: name.into(),
            description,
            price,
            delivery_price,
        }
    }

    /// Returns a copy carrying the given id.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Case-insensitive substring match over the name. Case folding is Unicode-aware.
    pub fn name_contains(&self, text: &str) -> bool {
        self.name.to_lowercase().contains(&text.to_lowercase())
    }
}

// =============================================================================
// Product Option
// =============================================================================

/// A named variant of a product (e.g. a colour or size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    /// Unique identifier (UUID v4).
    #[ts(as = "String")]
    pub id: Uuid,

    /// Owning product. Immutable after creation.
    #[ts(as = "String")]
    pub product_id: Uuid,

    /// Display name, 1..=100 characters.
    pub name: String,

    /// Optional description, at most 500 characters.
    pub description: Option<String>,
}

impl ProductOption {
    /// Creates an option that has not been stored yet (nil ids).
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        ProductOption {
            id: Uuid::nil(),
            product_id: Uuid::nil(),
            name: name.into(),
            description,
        }
    }

    /// Returns a copy carrying the given ids.
    pub fn with_ids(mut self, product_id: Uuid, id: Uuid) -> Self {
        self.product_id = product_id;
        self.id = id;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::new(
            "Widget",
            None,
            Decimal::from_str("9.99").unwrap(),
            Decimal::ZERO,
        );
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"], "9.99");
        assert_eq!(json["deliveryPrice"], "0");
        assert!(json.get("delivery_price").is_none());
    }

    #[test]
    fn test_name_contains_folds_unicode_case() {
        let product = Product::new("ÉCLAIR au chocolat", None, Decimal::ONE, Decimal::ZERO);

        assert!(product.name_contains("éclair"));
        assert!(product.name_contains("CHOCO"));
        assert!(product.name_contains(""));
        assert!(!product.name_contains("eclair"));
    }

    #[test]
    fn test_option_with_ids() {
        let product_id = Uuid::new_v4();
        let option_id = Uuid::new_v4();
        let option = ProductOption::new("Red", None).with_ids(product_id, option_id);

        assert_eq!(option.product_id, product_id);
        assert_eq!(option.id, option_id);

        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["productId"], product_id.to_string());
    }

    #[test]
    fn test_product_accepts_numeric_prices() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Widget",
            "description": null,
            "price": 12,
            "deliveryPrice": "1.50"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.price, Decimal::from(12));
        assert_eq!(product.delivery_price, Decimal::from_str("1.50").unwrap());
    }
}
