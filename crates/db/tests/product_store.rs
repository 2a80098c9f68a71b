//! Integration tests for `PgProductStore` against a real database.
//!
//! The schema is applied from `fixtures/schema.sql`; no migrations run.

use assert_matches::assert_matches;
use rust_decimal::Decimal;
use sqlx::PgPool;
use storefront_core::error::CoreError;
use storefront_core::product::Product;
use storefront_core::store::ProductStore;
use storefront_db::repositories::ProductRepo;
use storefront_db::PgProductStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(category_id: i64, name: &str) -> Product {
    Product {
        id: 0,
        category_id,
        product_name: name.to_string(),
        product_description: format!("{name} description"),
        product_stock: 10,
        product_price: Decimal::new(150, 2),
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn create_assigns_id_and_round_trips(pool: PgPool) {
    let store = PgProductStore::new(pool);

    let created = store.create(&new_product(1, "Pen")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.product_name, "Pen");
    assert_eq!(created.product_price, Decimal::new(150, 2));

    let fetched = store.find_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn create_ignores_supplied_id(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let mut product = new_product(1, "Pen");
    product.id = 500;

    let created = store.create(&product).await.unwrap();
    assert_ne!(created.id, 500);
}

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn find_missing_product_is_none(pool: PgPool) {
    let store = PgProductStore::new(pool);
    assert_eq!(store.find_by_id(999_999).await.unwrap(), None);
}

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn find_all_is_ordered_by_id(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let a = store.create(&new_product(1, "Pen")).await.unwrap();
    let b = store.create(&new_product(2, "Novel")).await.unwrap();

    let ids: Vec<_> = store.find_all().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn find_by_category_filters(pool: PgPool) {
    let store = PgProductStore::new(pool);
    store.create(&new_product(1, "Pen")).await.unwrap();
    store.create(&new_product(2, "Novel")).await.unwrap();
    store.create(&new_product(1, "Ruler")).await.unwrap();

    let stationery = store.find_by_category(1).await.unwrap();
    assert_eq!(stationery.len(), 2);
    assert!(stationery.iter().all(|p| p.category_id == 1));
    assert!(store.find_by_category(3).await.unwrap().is_empty());
}

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn list_categories_returns_fixture_rows(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let names: Vec<_> = store
        .list_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.category_name)
        .collect();
    assert_eq!(names, vec!["Stationery", "Books"]);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn update_overwrites_all_columns(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let mut pen = store.create(&new_product(1, "Pen")).await.unwrap();

    pen.category_id = 2;
    pen.product_name = "Fountain pen".to_string();
    pen.product_stock = 0;
    pen.product_price = Decimal::new(2599, 2);

    let updated = store.update(&pen).await.unwrap();
    assert_eq!(updated, Some(pen));
}

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn update_missing_product_is_none(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let mut ghost = new_product(1, "Ghost");
    ghost.id = 404;
    assert_eq!(store.update(&ghost).await.unwrap(), None);
}

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn delete_returns_removed_row(pool: PgPool) {
    let store = PgProductStore::new(pool.clone());
    let pen = store.create(&new_product(1, "Pen")).await.unwrap();

    assert_eq!(store.delete_by_id(pen.id).await.unwrap(), Some(pen.clone()));
    assert_eq!(store.delete_by_id(pen.id).await.unwrap(), None);
    assert!(ProductRepo::find_by_id(&pool, pen.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Error classification
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn unknown_category_is_conflict(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let result = store.create(&new_product(42, "Orphan")).await;
    assert_matches!(result, Err(CoreError::Conflict(_)));
}

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn price_overflowing_column_is_validation_error(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let mut product = new_product(1, "Gold pen");
    product.product_price = Decimal::new(12_345_678_900, 2);

    let result = store.create(&product).await;
    assert_matches!(result, Err(CoreError::Validation(_)));
    assert!(store.find_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = false, fixtures("schema", "categories"))]
async fn negative_stock_is_validation_error(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let created = store.create(&new_product(1, "Pen")).await.unwrap();

    let mut product = created.clone();
    product.product_stock = -1;
    let result = store.update(&product).await;
    assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("product_stock"));
}

#[sqlx::test(migrations = false, fixtures("schema"))]
async fn missing_table_is_store_error(pool: PgPool) {
    sqlx::query("DROP TABLE product").execute(&pool).await.unwrap();
    let store = PgProductStore::new(pool);
    assert_matches!(store.find_all().await, Err(CoreError::Store(_)));
}

#[sqlx::test(migrations = false)]
async fn health_check_succeeds(pool: PgPool) {
    let store = PgProductStore::new(pool);
    assert!(store.health_check().await.is_ok());
}
