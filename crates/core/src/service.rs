//! Product workflow: validate, normalize, then create or update.
//!
//! Also gates the id-based lookups and deletes: an id that is not a plain
//! non-negative integer is rejected before the store is touched.

use std::sync::Arc;

use crate::error::CoreError;
use crate::normalize::validate_product;
use crate::product::{Category, Product, RawProduct};
use crate::store::{ProductStore, PRODUCT_ENTITY};
use crate::types::DbId;
use crate::validation::validate_id;

/// Message returned for any rejected product submission.
pub const INVALID_PRODUCT: &str = "Invalid product";

/// Message returned when a product id path segment fails validation.
pub const INVALID_PRODUCT_ID: &str = "Invalid product id";

/// Message returned when a category id path segment fails validation.
pub const INVALID_CATEGORY_ID: &str = "Invalid category id";

/// Which persistence path a submission took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Created(Product),
    Updated(Product),
}

impl Submission {
    pub fn product(&self) -> &Product {
        match self {
            Submission::Created(p) | Submission::Updated(p) => p,
        }
    }

    pub fn into_product(self) -> Product {
        match self {
            Submission::Created(p) | Submission::Updated(p) => p,
        }
    }
}

/// Stateless orchestration over an injected [`ProductStore`].
///
/// Cheap to clone; every call is independent.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        self.store.find_all().await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.store.list_categories().await
    }

    /// Whether the backing store answers its health probe.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await.is_ok()
    }

    /// Look up a single product by the id text taken from the request path.
    pub async fn fetch_by_id(&self, id: &str) -> Result<Product, CoreError> {
        let id = parse_id(id, INVALID_PRODUCT_ID)?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: PRODUCT_ENTITY,
                id,
            })
    }

    /// Products in the category named by `category_id`.
    pub async fn fetch_by_category(&self, category_id: &str) -> Result<Vec<Product>, CoreError> {
        let category_id = parse_id(category_id, INVALID_CATEGORY_ID)?;
        self.store.find_by_category(category_id).await
    }

    /// Validate and persist a submission.
    ///
    /// `id` absent or `0` creates a new product; any positive `id` updates
    /// the existing one. Field-level failures are logged here and collapsed
    /// into a single [`INVALID_PRODUCT`] validation error.
    pub async fn submit_product(&self, raw: &RawProduct) -> Result<Submission, CoreError> {
        let product = match validate_product(raw) {
            Ok(product) => product,
            Err(errors) => {
                tracing::warn!(%errors, "Product submission failed validation");
                return Err(CoreError::Validation(INVALID_PRODUCT.to_string()));
            }
        };

        if product.is_new() {
            let created = self.store.create(&product).await?;
            tracing::info!(product_id = created.id, "Product created");
            Ok(Submission::Created(created))
        } else {
            let id = product.id;
            let updated = self
                .store
                .update(&product)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: PRODUCT_ENTITY,
                    id,
                })?;
            tracing::info!(product_id = id, "Product updated");
            Ok(Submission::Updated(updated))
        }
    }

    /// Delete a product, returning the removed record.
    pub async fn remove(&self, id: &str) -> Result<Product, CoreError> {
        let id = parse_id(id, INVALID_PRODUCT_ID)?;
        let removed = self
            .store
            .delete_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: PRODUCT_ENTITY,
                id,
            })?;
        tracing::info!(product_id = id, "Product deleted");
        Ok(removed)
    }
}

fn parse_id(value: &str, message: &str) -> Result<DbId, CoreError> {
    validate_id(value).ok_or_else(|| {
        tracing::debug!(value, "Rejected id");
        CoreError::Validation(message.to_string())
    })
}
