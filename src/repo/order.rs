//! Order row access.

use crate::error::AppError;
use crate::models::{Order, OrderInput};
use sqlx::PgPool;

const COLUMNS: &str = "id, date, customer_id";

pub async fn list_all(pool: &PgPool) -> Result<Vec<Order>, AppError> {
    let rows = sqlx::query_as::<_, Order>(&format!(
        "SELECT {} FROM orders ORDER BY id",
        COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Order>, AppError> {
    let row = sqlx::query_as::<_, Order>(&format!(
        "SELECT {} FROM orders WHERE id = $1",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, input: &OrderInput) -> Result<Order, AppError> {
    let row = sqlx::query_as::<_, Order>(&format!(
        "INSERT INTO orders (date, customer_id) VALUES ($1, $2) RETURNING {}",
        COLUMNS
    ))
    .bind(input.date)
    .bind(input.customer_id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Full replace of date and customer_id. None if the row is gone.
pub async fn update(
    pool: &PgPool,
    id: i64,
    input: &OrderInput,
) -> Result<Option<Order>, AppError> {
    let row = sqlx::query_as::<_, Order>(&format!(
        "UPDATE orders SET date = $1, customer_id = $2 WHERE id = $3 RETURNING {}",
        COLUMNS
    ))
    .bind(input.date)
    .bind(input.customer_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
