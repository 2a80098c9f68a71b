use sqlx::FromRow;
use storefront_core::product::Category;
use storefront_core::types::DbId;

/// A row from the `category` table.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: DbId,
    pub category_name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            category_name: row.category_name,
        }
    }
}
