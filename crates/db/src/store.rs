use async_trait::async_trait;
use storefront_core::error::CoreError;
use storefront_core::product::{Category, Product};
use storefront_core::store::ProductStore;
use storefront_core::types::DbId;

use crate::repositories::{CategoryRepo, ProductRepo};
use crate::DbPool;

/// PostgreSQL error code for a foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL error code for a unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL error code for a check constraint violation.
const CHECK_VIOLATION: &str = "23514";

/// PostgreSQL error code for a value that does not fit its column type.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// [`ProductStore`] backed by a PostgreSQL pool.
///
/// Every sqlx failure is logged here, tagged with the operation that
/// produced it, before being returned as a [`CoreError`].
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: DbPool,
}

impl PgProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, CoreError> {
        let rows = ProductRepo::list(&self.pool)
            .await
            .map_err(|e| classify("get all products", e))?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, CoreError> {
        let row = ProductRepo::find_by_id(&self.pool, id)
            .await
            .map_err(|e| classify("get product by id", e))?;
        Ok(row.map(Product::from))
    }

    async fn find_by_category(&self, category_id: DbId) -> Result<Vec<Product>, CoreError> {
        let rows = ProductRepo::list_by_category(&self.pool, category_id)
            .await
            .map_err(|e| classify("get products by category", e))?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn create(&self, product: &Product) -> Result<Product, CoreError> {
        let row = ProductRepo::create(&self.pool, product)
            .await
            .map_err(|e| classify("create product", e))?;
        Ok(row.into())
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, CoreError> {
        let row = ProductRepo::update(&self.pool, product)
            .await
            .map_err(|e| classify("update product", e))?;
        Ok(row.map(Product::from))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<Option<Product>, CoreError> {
        let row = ProductRepo::delete(&self.pool, id)
            .await
            .map_err(|e| classify("delete product", e))?;
        Ok(row.map(Product::from))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        let rows = CategoryRepo::list(&self.pool)
            .await
            .map_err(|e| classify("get all categories", e))?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| classify("health check", e))
    }
}

/// Log a sqlx error and map it onto the core error taxonomy.
///
/// - Foreign key and unique violations become [`CoreError::Conflict`].
/// - Check violations and out-of-range values become
///   [`CoreError::Validation`]: the row itself was unacceptable.
/// - Everything else becomes [`CoreError::Store`].
fn classify(operation: &'static str, err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => {
                tracing::warn!(operation, error = %db_err, "DB constraint violation");
                let constraint = db_err.constraint().unwrap_or("unknown");
                return CoreError::Conflict(format!(
                    "Referenced record does not exist: {constraint}"
                ));
            }
            Some(UNIQUE_VIOLATION) => {
                tracing::warn!(operation, error = %db_err, "DB constraint violation");
                let constraint = db_err.constraint().unwrap_or("unknown");
                return CoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ));
            }
            Some(CHECK_VIOLATION) => {
                tracing::warn!(operation, error = %db_err, "DB check constraint violation");
                let constraint = db_err.constraint().unwrap_or("unknown");
                return CoreError::Validation(format!("Value violates constraint: {constraint}"));
            }
            Some(NUMERIC_VALUE_OUT_OF_RANGE) => {
                tracing::warn!(operation, error = %db_err, "DB value out of range");
                return CoreError::Validation("Value out of range".to_string());
            }
            _ => {}
        }
    }
    tracing::error!(operation, error = %err, "DB error");
    CoreError::Store(err.to_string())
}
