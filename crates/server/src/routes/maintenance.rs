use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::maintenance_log;
use serde::Serialize;
use service::maintenance_service::{self, LogInput};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Serialize, Debug, PartialEq)]
pub struct LogView {
    pub log_id: i32,
    pub technician_name: String,
    pub date: Option<String>,
    pub total_time_spent: f64,
    pub comments: Option<String>,
    pub parts_used: Option<String>,
}

impl From<maintenance_log::Model> for LogView {
    fn from(l: maintenance_log::Model) -> Self {
        Self {
            log_id: l.log_id,
            technician_name: l.technician_name,
            date: l.date,
            total_time_spent: l.total_time_spent,
            comments: l.comments,
            parts_used: l.parts_used,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct LogList {
    pub logs: Vec<LogView>,
}

#[derive(Serialize, Debug)]
pub struct LogCreated {
    pub message: &'static str,
    pub log_id: i32,
}

#[utoipa::path(get, path = "/machines/{machine_id}/maintenance", tag = "maintenance", params(("machine_id" = i32, Path, description = "Machine id")), responses((status = 200, description = "Maintenance history of the machine", body = crate::openapi::LogListDoc)))]
pub async fn list_logs(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<LogList>, ApiError> {
    let Path(machine_id) = path?;
    let rows = maintenance_service::list_logs(&state.db, machine_id).await?;
    Ok(Json(LogList { logs: rows.into_iter().map(LogView::from).collect() }))
}

#[utoipa::path(post, path = "/machines/{machine_id}/maintenance", tag = "maintenance", params(("machine_id" = i32, Path, description = "Serviced machine id")), request_body = crate::openapi::LogRequest, responses((status = 201, description = "Maintenance log added"), (status = 400, description = "Missing fields or unknown machine")))]
pub async fn create_log(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<LogInput>, JsonRejection>,
) -> Result<(StatusCode, Json<LogCreated>), ApiError> {
    let Path(machine_id) = path?;
    let Json(input) = body?;
    let created = maintenance_service::create_log(&state.db, machine_id, input, &state.log_date).await?;
    Ok((
        StatusCode::CREATED,
        Json(LogCreated { message: "Maintenance log added!", log_id: created.log_id }),
    ))
}

#[utoipa::path(delete, path = "/maintenance/{log_id}", tag = "maintenance", params(("log_id" = i32, Path, description = "Log id")), responses((status = 200, description = "Log deleted"), (status = 404, description = "No such log")))]
pub async fn delete_log(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(log_id) = path?;
    maintenance_service::delete_log(&state.db, log_id).await?;
    Ok(Json(Message::new("Maintenance log deleted successfully")))
}
