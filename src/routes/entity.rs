//! Entity routes. Static segments (`by-email`, `by-name`) take precedence
//! over the `:id` capture in axum's router.

use crate::handlers::{customer, order, product};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(customer::list).post(customer::create))
        .route("/customers/by-email", get(customer::find_by_email))
        .route(
            "/customers/:id",
            get(customer::get)
                .put(customer::update)
                .delete(customer::remove),
        )
        .route("/products", get(product::list).post(product::create))
        .route("/products/by-name", get(product::find_by_name))
        .route(
            "/products/:id",
            get(product::get)
                .put(product::update)
                .delete(product::remove),
        )
        .route("/orders", get(order::list).post(order::create))
        .route(
            "/orders/:id",
            get(order::get).put(order::update).delete(order::remove),
        )
        .with_state(state)
}
