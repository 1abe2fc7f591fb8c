//! Process entry point: config, pool, migrations, router, serve.

use axum::Router;
use commerce_records::{
    apply_migrations, common_routes, connect_pool, ensure_database_exists, entity_routes,
    AppConfig, AppState,
};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("commerce_records=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env();
    ensure_database_exists(&config.database_url).await?;
    let pool = connect_pool(&config.database_url).await?;
    apply_migrations(&pool).await?;
    let state = AppState { pool };

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
