//! Repository for the `category` table.

use sqlx::PgPool;

use crate::models::category::CategoryRow;

/// Column list for `category` queries.
const COLUMNS: &str = "id, category_name";

/// Provides read access for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category ORDER BY id");
        sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(pool)
            .await
    }
}
