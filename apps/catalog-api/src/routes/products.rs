//! Product handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::validation::parse_id;
use catalog_core::Product;
use tracing::info;

use crate::dto::{json_body, query_params, Items, ListQuery, ProductRequest};
use crate::error::ApiResult;
use crate::AppState;

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Items<Product>>> {
    let query = query_params(query)?;
    let products = match query.name_filter() {
        Some(name) => state.catalog.list_by_name(name).await?,
        None => state.catalog.list_all().await?,
    };

    Ok(Json(products.into()))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_id("id", &id)?;

    Ok(Json(state.catalog.get_by_id(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let product = json_body(payload)?.into_product()?;

    let created = state.catalog.create(product).await?;
    info!(id = %created.id, name = %created.name, "Product created");

    let location = format!("/products/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let id = parse_id("id", &id)?;
    let product = json_body(payload)?.into_product()?;

    Ok(Json(state.catalog.update(id, product).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_id("id", &id)?;

    let deleted = state.catalog.delete(id).await?;
    info!(id = %deleted.id, "Product deleted");

    Ok(Json(deleted))
}
