use axum::{
    routing::{delete, get},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::{Health, Message};

use crate::openapi;
use crate::state::AppState;

pub mod areas;
pub mod machines;
pub mod maintenance;

pub const WELCOME: &str = "Welcome to FacilitiPro API";

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Welcome message")))]
pub async fn home() -> Json<Message> {
    Json(Message::new(WELCOME))
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::openapi_json))
        .route("/areas", get(areas::list_areas).post(areas::create_area))
        .route("/areas/:area_id", delete(areas::delete_area))
        .route(
            "/areas/:area_id/machines",
            get(machines::list_machines).post(machines::create_machine),
        )
        .route("/machines/:machine_id", delete(machines::delete_machine))
        .route(
            "/machines/:machine_id/maintenance",
            get(maintenance::list_logs).post(maintenance::create_log),
        )
        .route("/maintenance/:log_id", delete(maintenance::delete_log))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
