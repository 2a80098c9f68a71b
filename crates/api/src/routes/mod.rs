pub mod category;
pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                  list
///
/// /products                    list, submit (POST/PUT)
/// /products/{id}               get, delete
/// /products/bycat/{cat_id}     list by category
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/products", product::router())
}
