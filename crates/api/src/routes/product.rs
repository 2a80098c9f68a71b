//! Route definitions for products.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> submit
/// PUT    /                -> submit
/// GET    /{id}            -> get_by_id
/// DELETE /{id}            -> delete
/// GET    /bycat/{cat_id}  -> list_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(product::list)
                .post(product::submit)
                .put(product::submit),
        )
        .route("/{id}", get(product::get_by_id).delete(product::delete))
        .route("/bycat/{cat_id}", get(product::list_by_category))
}
