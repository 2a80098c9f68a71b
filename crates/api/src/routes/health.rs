use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Ok,
    Degraded,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: StoreStatus,
    pub service: &'static str,
    pub version: &'static str,
    pub store_healthy: bool,
}

/// GET /health
///
/// Always answers 200. A failed product store probe downgrades `status`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = state.products.store_healthy().await;
    if !store_healthy {
        tracing::warn!("Product store failed its health probe");
    }

    Json(HealthResponse {
        status: if store_healthy {
            StoreStatus::Ok
        } else {
            StoreStatus::Degraded
        },
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
    })
}

/// Root-level routes, mounted outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
