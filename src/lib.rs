//! Commerce Records: e-commerce record-keeping REST service over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod repo;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use error::AppError;
pub use migration::apply_migrations;
pub use response::Message;
pub use routes::{common_routes, entity_routes};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists};
pub use validation::ValidationErrors;
