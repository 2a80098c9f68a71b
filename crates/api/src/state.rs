use storefront_core::service::ProductService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the service holds its store behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Product workflow over the configured store.
    pub products: ProductService,
}
