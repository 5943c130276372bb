//! # Request and Response Shapes
//!
//! Request bodies arrive with every field optional so that a missing field
//! becomes a `VALIDATION_ERROR` naming that field, not a generic JSON
//! rejection. `into_product` / `into_option` run the catalog-core field rules
//! before anything reaches the orchestrator.
//!
//! Body `id` / `productId` are accepted and carried along; the orchestrator
//! overwrites them with the route ids.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use catalog_core::validation::{validate_option, validate_product, ValidationResult};
use catalog_core::{Product, ProductOption, ValidationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Unwraps a JSON body, turning extractor rejections into validation errors.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::validation(rejection.body_text()))
}

/// Unwraps a query string the same way [`json_body`] unwraps a body.
pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| ApiError::validation(rejection.body_text()))
}

fn required<T>(value: Option<T>, field: &str) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })
}

// =============================================================================
// Products
// =============================================================================

/// Body of `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[ts(as = "Option<String>")]
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[ts(as = "Option<String>")]
    pub price: Option<Decimal>,
    #[ts(as = "Option<String>")]
    pub delivery_price: Option<Decimal>,
}

impl ProductRequest {
    /// Builds a validated product. Stops at the first failing field.
    pub fn into_product(self) -> ValidationResult<Product> {
        let name = required(self.name, "name")?;
        let price = required(self.price, "price")?;
        let delivery_price = required(self.delivery_price, "deliveryPrice")?;

        let product = Product::new(name, self.description, price, delivery_price)
            .with_id(self.id.unwrap_or_default());
        validate_product(&product)?;

        Ok(product)
    }
}

// =============================================================================
// Options
// =============================================================================

/// Body of `POST /products/{id}/options` and `PUT /products/{id}/options/{optionId}`.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OptionRequest {
    #[ts(as = "Option<String>")]
    pub id: Option<Uuid>,
    #[ts(as = "Option<String>")]
    pub product_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl OptionRequest {
    /// Builds a validated option.
    pub fn into_option(self) -> ValidationResult<ProductOption> {
        let name = required(self.name, "name")?;

        let option = ProductOption::new(name, self.description).with_ids(
            self.product_id.unwrap_or_default(),
            self.id.unwrap_or_default(),
        );
        validate_option(&option)?;

        Ok(option)
    }
}

// =============================================================================
// Envelopes
// =============================================================================

/// Collection envelope: `{"items": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(items: Vec<T>) -> Self {
        Items { items }
    }
}

/// Query string of `GET /products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
}

impl ListQuery {
    /// The name filter, if one was given and is not blank.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}
