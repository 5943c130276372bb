//! Option handlers, nested under `/products/:id/options`.
//!
//! Both path ids are parsed before the body so a bad id is reported even when
//! the body is also bad.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::validation::parse_id;
use catalog_core::ProductOption;
use tracing::info;
use uuid::Uuid;

use crate::dto::{json_body, Items, OptionRequest};
use crate::error::ApiResult;
use crate::AppState;

fn parse_ids(product_id: &str, option_id: &str) -> ApiResult<(Uuid, Uuid)> {
    Ok((parse_id("id", product_id)?, parse_id("optionId", option_id)?))
}

pub async fn list(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Json<Items<ProductOption>>> {
    let product_id = parse_id("id", &product_id)?;

    Ok(Json(state.catalog.list_options(product_id).await?.into()))
}

pub async fn get(
    State(state): State<AppState>,
    Path((product_id, option_id)): Path<(String, String)>,
) -> ApiResult<Json<ProductOption>> {
    let (product_id, option_id) = parse_ids(&product_id, &option_id)?;

    Ok(Json(state.catalog.get_option(product_id, option_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<OptionRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let product_id = parse_id("id", &product_id)?;
    let option = json_body(payload)?.into_option()?;

    let created = state.catalog.create_option(product_id, option).await?;
    info!(id = %created.id, product_id = %product_id, "Option created");

    let location = format!("/products/{}/options/{}", product_id, created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path((product_id, option_id)): Path<(String, String)>,
    payload: Result<Json<OptionRequest>, JsonRejection>,
) -> ApiResult<Json<ProductOption>> {
    let (product_id, option_id) = parse_ids(&product_id, &option_id)?;
    let option = json_body(payload)?.into_option()?;

    Ok(Json(
        state
            .catalog
            .update_option(product_id, option_id, option)
            .await?,
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((product_id, option_id)): Path<(String, String)>,
) -> ApiResult<Json<ProductOption>> {
    let (product_id, option_id) = parse_ids(&product_id, &option_id)?;

    let deleted = state.catalog.delete_option(product_id, option_id).await?;
    info!(id = %deleted.id, product_id = %product_id, "Option deleted");

    Ok(Json(deleted))
}
