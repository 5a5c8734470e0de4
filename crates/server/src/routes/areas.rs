use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::area;
use serde::Serialize;
use service::area_service::{self, AreaInput};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Serialize, Debug)]
pub struct AreaList {
    pub areas: Vec<area::Model>,
}

#[derive(Serialize, Debug)]
pub struct AreaCreated {
    pub message: &'static str,
    pub area_id: i32,
}

#[utoipa::path(get, path = "/areas", tag = "areas", responses((status = 200, description = "All areas", body = crate::openapi::AreaListDoc)))]
pub async fn list_areas(State(state): State<AppState>) -> Result<Json<AreaList>, ApiError> {
    let areas = area_service::list_areas(&state.db).await?;
    Ok(Json(AreaList { areas }))
}

#[utoipa::path(post, path = "/areas", tag = "areas", request_body = crate::openapi::AreaRequest, responses((status = 201, description = "Area added"), (status = 400, description = "Missing field or duplicate name")))]
pub async fn create_area(
    State(state): State<AppState>,
    body: Result<Json<AreaInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AreaCreated>), ApiError> {
    let Json(input) = body?;
    let created = area_service::create_area(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(AreaCreated { message: "Area added!", area_id: created.area_id }),
    ))
}

#[utoipa::path(delete, path = "/areas/{area_id}", tag = "areas", params(("area_id" = i32, Path, description = "Area id")), responses((status = 200, description = "Area and everything under it deleted"), (status = 404, description = "No such area")))]
pub async fn delete_area(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(area_id) = path?;
    area_service::delete_area(&state.db, area_id).await?;
    Ok(Json(Message::new("Area deleted successfully")))
}
