//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::Json;
use storefront_core::product::Category;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.products.list_categories().await?;
    Ok(Json(categories))
}
