//! Customer endpoints.

use crate::error::AppError;
use crate::models::Customer;
use crate::repo::customer as repo;
use crate::response::Message;
use crate::state::AppState;
use crate::validation::validate_customer;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

const NOT_FOUND: &str = "Customer not found";

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = repo::list_all(&state.pool).await?;
    Ok(Json(customers))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let input = validate_customer(&body)?;
    let customer = repo::create(&state.pool, &input).await?;
    tracing::info!(id = customer.id, "customer created");
    Ok((
        StatusCode::CREATED,
        Json(Message::new("New customer added successfully")),
    ))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, AppError> {
    let customer = repo::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(customer))
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
    let input = validate_customer(&body)?;
    repo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(Message::new("Customer details updated successfully")))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    if !repo::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    tracing::info!(id, "customer removed");
    Ok(Json(Message::new("Customer removed successfully")))
}

pub async fn find_by_email(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Customer>, AppError> {
    let email = params
        .get("email")
        .ok_or_else(|| AppError::BadRequest("missing 'email' query parameter".into()))?;
    let customer = repo::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(customer))
}
