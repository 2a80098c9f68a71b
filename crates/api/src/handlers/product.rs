//! Handlers for the `/products` resource.
//!
//! POST and PUT share one submission path: the body's `id` decides between
//! create (`0` or absent) and update.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::product::{Product, RawProduct};
use storefront_core::service::Submission;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.list_products().await?;
    Ok(Json(products))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.products.fetch_by_id(&id).await?;
    Ok(Json(product))
}

/// GET /api/v1/products/bycat/{cat_id}
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(cat_id): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.fetch_by_category(&cat_id).await?;
    Ok(Json(products))
}

/// POST /api/v1/products and PUT /api/v1/products
///
/// Returns 201 when a product was created and 200 when one was updated.
pub async fn submit(
    State(state): State<AppState>,
    body: Result<Json<RawProduct>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let Json(raw) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected product body");
        AppError::BadRequest("Missing or malformed product data".to_string())
    })?;

    match state.products.submit_product(&raw).await? {
        Submission::Created(product) => Ok((StatusCode::CREATED, Json(product))),
        Submission::Updated(product) => Ok((StatusCode::OK, Json(product))),
    }
}

/// DELETE /api/v1/products/{id}
///
/// Returns the removed product.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.products.remove(&id).await?;
    Ok(Json(product))
}
