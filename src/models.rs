//! Entity row types and validated input types.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A customer row. Email and phone are nullable at the schema level; the
/// validator requires them on write, so rows created through the API always
/// carry both.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A product row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// An order row. `customer_id` is null for orders whose customer was deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub date: NaiveDate,
    pub customer_id: Option<i64>,
}

/// Validated customer fields, produced by `validation::validate_customer`.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Validated product fields, produced by `validation::validate_product`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
}

/// Validated order fields, produced by `validation::validate_order`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderInput {
    pub date: NaiveDate,
    pub customer_id: Option<i64>,
}
