use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::machine;
use serde::Serialize;
use service::machine_service::{self, MachineInput};

use crate::errors::ApiError;
use crate::state::AppState;

/// Machine as listed under its area; `area_id` is implied by the path.
#[derive(Serialize, Debug, PartialEq)]
pub struct MachineView {
    pub machine_id: i32,
    pub machine_name: String,
    pub asset_number: String,
    pub location: Option<String>,
    pub last_maintenance_date: Option<String>,
}

impl From<machine::Model> for MachineView {
    fn from(m: machine::Model) -> Self {
        Self {
            machine_id: m.machine_id,
            machine_name: m.machine_name,
            asset_number: m.asset_number,
            location: m.location,
            last_maintenance_date: m.last_maintenance_date,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct MachineList {
    pub machines: Vec<MachineView>,
}

#[derive(Serialize, Debug)]
pub struct MachineCreated {
    pub message: &'static str,
    pub machine_id: i32,
}

#[utoipa::path(get, path = "/areas/{area_id}/machines", tag = "machines", params(("area_id" = i32, Path, description = "Area id")), responses((status = 200, description = "Machines in the area", body = crate::openapi::MachineListDoc)))]
pub async fn list_machines(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<MachineList>, ApiError> {
    let Path(area_id) = path?;
    let rows = machine_service::list_machines(&state.db, area_id).await?;
    Ok(Json(MachineList { machines: rows.into_iter().map(MachineView::from).collect() }))
}

#[utoipa::path(post, path = "/areas/{area_id}/machines", tag = "machines", params(("area_id" = i32, Path, description = "Owning area id")), request_body = crate::openapi::MachineRequest, responses((status = 201, description = "Machine added"), (status = 400, description = "Missing fields, unknown area or duplicate asset number")))]
pub async fn create_machine(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<MachineInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MachineCreated>), ApiError> {
    let Path(area_id) = path?;
    let Json(input) = body?;
    let created = machine_service::create_machine(&state.db, area_id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MachineCreated { message: "Machine added!", machine_id: created.machine_id }),
    ))
}

#[utoipa::path(delete, path = "/machines/{machine_id}", tag = "machines", params(("machine_id" = i32, Path, description = "Machine id")), responses((status = 200, description = "Machine and its logs deleted"), (status = 404, description = "No such machine")))]
pub async fn delete_machine(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(machine_id) = path?;
    machine_service::delete_machine(&state.db, machine_id).await?;
    Ok(Json(Message::new("Machine deleted successfully")))
}
