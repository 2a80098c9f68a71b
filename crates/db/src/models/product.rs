use rust_decimal::Decimal;
use sqlx::FromRow;
use storefront_core::product::Product;
use storefront_core::types::DbId;

/// A row from the `product` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: DbId,
    pub category_id: DbId,
    pub product_name: String,
    pub product_description: String,
    pub product_stock: i32,
    pub product_price: Decimal,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            category_id: row.category_id,
            product_name: row.product_name,
            product_description: row.product_description,
            product_stock: row.product_stock,
            product_price: row.product_price,
        }
    }
}
