use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ProductStore;
use crate::error::CoreError;
use crate::product::{Category, Product};
use crate::types::DbId;

/// In-process [`ProductStore`] keyed by id.
///
/// Ids are assigned sequentially starting at 1. Writes referencing an
/// unknown category are rejected with [`CoreError::Conflict`], the same way
/// the `product.category_id` foreign key behaves in PostgreSQL.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    products: BTreeMap<DbId, Product>,
    categories: BTreeMap<DbId, Category>,
    last_id: DbId,
}

impl Inner {
    fn ensure_category(&self, category_id: DbId) -> Result<(), CoreError> {
        if self.categories.contains_key(&category_id) {
            Ok(())
        } else {
            tracing::error!(category_id, "Memory store - unknown category");
            Err(CoreError::Conflict(format!(
                "Category {category_id} does not exist"
            )))
        }
    }
}

impl MemoryProductStore {
    /// A store pre-populated with the given categories.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let categories = categories.into_iter().map(|c| (c.id, c)).collect();
        Self {
            inner: RwLock::new(Inner {
                categories,
                ..Inner::default()
            }),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner.products.get(&id).cloned())
    }

    async fn find_by_category(&self, category_id: DbId) -> Result<Vec<Product>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .products
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn create(&self, product: &Product) -> Result<Product, CoreError> {
        let mut inner = self.inner.write().await;
        inner.ensure_category(product.category_id)?;

        inner.last_id += 1;
        let created = Product {
            id: inner.last_id,
            ..product.clone()
        };
        inner.products.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, CoreError> {
        let mut inner = self.inner.write().await;
        if !inner.products.contains_key(&product.id) {
            return Ok(None);
        }
        inner.ensure_category(product.category_id)?;

        inner.products.insert(product.id, product.clone());
        Ok(Some(product.clone()))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<Option<Product>, CoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.products.remove(&id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner.categories.values().cloned().collect())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
