//! Persistence seam for products and categories.
//!
//! The workflow talks to storage only through [`ProductStore`]. The
//! PostgreSQL implementation lives in `storefront-db`; [`MemoryProductStore`]
//! backs tests and local runs without a database.

mod memory;

pub use memory::MemoryProductStore;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::product::{Category, Product};
use crate::types::DbId;

/// Entity name used in [`CoreError::NotFound`] for products.
pub const PRODUCT_ENTITY: &str = "Product";

/// Storage operations consumed by [`crate::service::ProductService`].
///
/// Implementations log their own failures and report them as
/// [`CoreError::Store`] or [`CoreError::Conflict`]. They own id assignment.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, ordered by id.
    async fn find_all(&self) -> Result<Vec<Product>, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, CoreError>;

    /// Products whose `category_id` equals `category_id`, ordered by id.
    async fn find_by_category(&self, category_id: DbId) -> Result<Vec<Product>, CoreError>;

    /// Insert a product. The input `id` is ignored and a fresh one assigned.
    async fn create(&self, product: &Product) -> Result<Product, CoreError>;

    /// Overwrite the product with `product.id`. `None` if no such row.
    async fn update(&self, product: &Product) -> Result<Option<Product>, CoreError>;

    /// Remove a product, returning the removed record. `None` if no such row.
    async fn delete_by_id(&self, id: DbId) -> Result<Option<Product>, CoreError>;

    /// All categories, ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, CoreError>;

    /// Cheap reachability probe used by the health endpoint.
    async fn health_check(&self) -> Result<(), CoreError>;
}
