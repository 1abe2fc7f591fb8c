//! Customer row access.

use crate::error::AppError;
use crate::models::{Customer, CustomerInput};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, email, phone";

pub async fn list_all(pool: &PgPool) -> Result<Vec<Customer>, AppError> {
    let rows = sqlx::query_as::<_, Customer>(&format!(
        "SELECT {} FROM customers ORDER BY id",
        COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<Customer>, AppError> {
    let row = sqlx::query_as::<_, Customer>(&format!(
        "SELECT {} FROM customers WHERE id = $1",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// First customer with the given email, lowest id wins.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Customer>, AppError> {
    let row = sqlx::query_as::<_, Customer>(&format!(
        "SELECT {} FROM customers WHERE email = $1 ORDER BY id LIMIT 1",
        COLUMNS
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, input: &CustomerInput) -> Result<Customer, AppError> {
    let row = sqlx::query_as::<_, Customer>(&format!(
        "INSERT INTO customers (name, email, phone) VALUES ($1, $2, $3) RETURNING {}",
        COLUMNS
    ))
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.phone)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Full replace of the validated fields. None if the row is gone.
pub async fn update(
    pool: &PgPool,
    id: i64,
    input: &CustomerInput,
) -> Result<Option<Customer>, AppError> {
    let row = sqlx::query_as::<_, Customer>(&format!(
        "UPDATE customers SET name = $1, email = $2, phone = $3 WHERE id = $4 RETURNING {}",
        COLUMNS
    ))
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
