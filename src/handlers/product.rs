//! Product endpoints.

use crate::error::AppError;
use crate::models::Product;
use crate::repo::product as repo;
use crate::response::Message;
use crate::state::AppState;
use crate::validation::validate_product;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

const NOT_FOUND: &str = "Product not found";

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = repo::list_all(&state.pool).await?;
    Ok(Json(products))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let input = validate_product(&body)?;
    let product = repo::create(&state.pool, &input).await?;
    tracing::info!(id = product.id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(Message::new("Product added successfully")),
    ))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    let product = repo::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(product))
}

/// Fetch precedes validation: a missing row is a 404 even for a bad body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Message>, AppError> {
    repo::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    let input = validate_product(&body)?;
    repo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(Message::new("Product updated successfully")))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    if !repo::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    tracing::info!(id, "product removed");
    Ok(Json(Message::new("Product deleted successfully")))
}

pub async fn find_by_name(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Product>, AppError> {
    let name = params
        .get("name")
        .ok_or_else(|| AppError::BadRequest("missing 'name' query parameter".into()))?;
    let product = repo::find_by_name(&state.pool, name)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(product))
}
