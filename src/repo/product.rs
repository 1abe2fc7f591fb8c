//! Product row access.

use crate::error::AppError;
use crate::models::{Product, ProductInput};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, price";

pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, AppError> {
    let rows = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products ORDER BY id",
        COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Product>, AppError> {
    let row = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products WHERE id = $1",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// First product whose name matches exactly, lowest id wins. No partial
/// matching.
pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Product>, AppError> {
    let row = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products WHERE name = $1 ORDER BY id LIMIT 1",
        COLUMNS
    ))
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, input: &ProductInput) -> Result<Product, AppError> {
    let row = sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING {}",
        COLUMNS
    ))
    .bind(&input.name)
    .bind(input.price)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Full replace of name and price. None if the row is gone.
pub async fn update(
    pool: &PgPool,
    id: i64,
    input: &ProductInput,
) -> Result<Option<Product>, AppError> {
    let row = sqlx::query_as::<_, Product>(&format!(
        "UPDATE products SET name = $1, price = $2 WHERE id = $3 RETURNING {}",
        COLUMNS
    ))
    .bind(&input.name)
    .bind(input.price)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
