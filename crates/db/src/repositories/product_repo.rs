//! Repository for the `product` table.
//!
//! Writes take the canonical [`Product`] from `storefront_core`; the caller
//! is responsible for having validated and sanitized it.

use sqlx::PgPool;
use storefront_core::product::Product;
use storefront_core::types::DbId;

use crate::models::product::ProductRow;

/// Column list for `product` queries.
const COLUMNS: &str = "\
    id, category_id, product_name, product_description, \
    product_stock, product_price";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List all products ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product ORDER BY id");
        sqlx::query_as::<_, ProductRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product WHERE id = $1");
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the products of one category ordered by id.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product WHERE category_id = $1 ORDER BY id");
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new product. `product.id` is ignored; the sequence assigns one.
    pub async fn create(pool: &PgPool, product: &Product) -> Result<ProductRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO product \
                 (category_id, product_name, product_description, product_stock, product_price) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(product.category_id)
            .bind(&product.product_name)
            .bind(&product.product_description)
            .bind(product.product_stock)
            .bind(product.product_price)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every column of the product with `product.id`.
    ///
    /// Returns `None` if no such product exists.
    pub async fn update(pool: &PgPool, product: &Product) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!(
            "UPDATE product SET \
                 category_id = $2, \
                 product_name = $3, \
                 product_description = $4, \
                 product_stock = $5, \
                 product_price = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(product.id)
            .bind(product.category_id)
            .bind(&product.product_name)
            .bind(&product.product_description)
            .bind(product.product_stock)
            .bind(product.product_price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID, returning the deleted row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!("DELETE FROM product WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
