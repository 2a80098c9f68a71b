//! PostgreSQL persistence for the storefront.
//!
//! [`PgProductStore`] implements [`storefront_core::store::ProductStore`] on
//! top of the zero-sized repositories in [`repositories`]. The schema itself
//! is owned outside this crate.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
mod store;

pub use store::PgProductStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
