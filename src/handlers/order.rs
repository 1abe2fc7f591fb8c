//! Order endpoints.

use crate::error::AppError;
use crate::models::{Order, OrderInput};
use crate::repo::{customer, order as repo};
use crate::response::Message;
use crate::state::AppState;
use crate::validation::{validate_order, ValidationErrors};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

const NOT_FOUND: &str = "Order not found";

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    let orders = repo::list_all(&state.pool).await?;
    Ok(Json(orders))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let input = validate_order(&body)?;
    ensure_customer_exists(&state, &input).await?;
    let order = repo::create(&state.pool, &input).await?;
    tracing::info!(id = order.id, "order created");
    Ok((
        StatusCode::CREATED,
        Json(Message::new("New order added successfully")),
    ))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Order>, AppError> {
    let order = repo::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(order))
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
    let input = validate_order(&body)?;
    ensure_customer_exists(&state, &input).await?;
    repo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(Message::new("Order details updated successfully")))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    if !repo::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    tracing::info!(id, "order removed");
    Ok(Json(Message::new("Order removed successfully")))
}

/// A referenced customer must exist before we hand the insert to the store;
/// reported as a field error rather than a foreign-key failure.
async fn ensure_customer_exists(state: &AppState, input: &OrderInput) -> Result<(), AppError> {
    if let Some(customer_id) = input.customer_id {
        if customer::get_by_id(&state.pool, customer_id).await?.is_none() {
            let mut errors = ValidationErrors::default();
            errors.push("customer_id", "Customer does not exist.");
            return Err(errors.into());
        }
    }
    Ok(())
}
