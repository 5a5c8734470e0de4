use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct AreaRequest { pub area_name: String }

#[derive(ToSchema)]
pub struct AreaDoc { pub area_id: i32, pub area_name: String }

#[derive(ToSchema)]
pub struct AreaListDoc { pub areas: Vec<AreaDoc> }

#[derive(ToSchema)]
pub struct MachineRequest {
    pub machine_name: String,
    pub asset_number: String,
    pub location: Option<String>,
    pub last_maintenance_date: Option<String>,
}

#[derive(ToSchema)]
pub struct MachineDoc {
    pub machine_id: i32,
    pub machine_name: String,
    pub asset_number: String,
    pub location: Option<String>,
    pub last_maintenance_date: Option<String>,
}

#[derive(ToSchema)]
pub struct MachineListDoc { pub machines: Vec<MachineDoc> }

#[derive(ToSchema)]
pub struct LogRequest {
    pub technician_name: String,
    /// Hours spent.
    pub total_time_spent: f64,
    pub comments: Option<String>,
    /// Any JSON value; non-string values are stored encoded.
    #[schema(value_type = Option<Object>)]
    pub parts_used: Option<serde_json::Value>,
}

#[derive(ToSchema)]
pub struct LogDoc {
    pub log_id: i32,
    pub technician_name: String,
    pub date: Option<String>,
    pub total_time_spent: f64,
    pub comments: Option<String>,
    pub parts_used: Option<String>,
}

#[derive(ToSchema)]
pub struct LogListDoc { pub logs: Vec<LogDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::home,
        crate::routes::health,
        crate::routes::areas::list_areas,
        crate::routes::areas::create_area,
        crate::routes::areas::delete_area,
        crate::routes::machines::list_machines,
        crate::routes::machines::create_machine,
        crate::routes::machines::delete_machine,
        crate::routes::maintenance::list_logs,
        crate::routes::maintenance::create_log,
        crate::routes::maintenance::delete_log,
    ),
    components(
        schemas(
            HealthResponse,
            AreaRequest,
            AreaDoc,
            AreaListDoc,
            MachineRequest,
            MachineDoc,
            MachineListDoc,
            LogRequest,
            LogDoc,
            LogListDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "areas"),
        (name = "machines"),
        (name = "maintenance"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
