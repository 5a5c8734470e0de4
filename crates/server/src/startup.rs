use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Any origin, any method, any header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the router over an already prepared store.
pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Open the store, create missing tables and serve until the listener fails.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    common::env::ensure_store_dir(&cfg.database.url).await?;

    let db = models::db::connect_and_prepare(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    info!("database tables initialized");

    let state = AppState::new(db, cfg.maintenance.log_date);
    info!(log_date = ?state.log_date, "maintenance log date policy");
    let app = build_app(state);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Bind { addr: addr.to_string(), reason: e.to_string() })?;
    info!(%addr, "running FacilitiPro API");
    axum::serve(listener, app).await?;
    Ok(())
}
