//! HTTP surface for the jobly companies and jobs API.

use axum::Router;
use axum::routing::get;
use deadpool_postgres::Pool;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod validate;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult};

/// Shared handler state. Connections are checked out per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: Pool,
}

impl AppState {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(routes::healthz))
        .nest("/companies", routes::companies::router())
        .nest("/jobs", routes::jobs::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind, serve until Ctrl+C, then drain in-flight requests.
pub async fn serve(cfg: &AppConfig) -> anyhow::Result<()> {
    let addr = cfg.addr()?;
    let pool = jobly::create_pool_with_config(&cfg.database.url, cfg.database.pool_size)?;
    let app = build_app(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, pool_size = cfg.database.pool_size, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
