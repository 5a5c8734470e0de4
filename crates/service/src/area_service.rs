use models::{area, errors::ModelError};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use tracing::info;

use crate::errors::{require, ServiceError};

pub const MISSING_AREA_NAME: &str = "Missing 'area_name' field";

/// Body of a create-area request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AreaInput {
    pub area_name: Option<String>,
}

/// All areas, oldest first.
pub async fn list_areas(db: &DatabaseConnection) -> Result<Vec<area::Model>, ServiceError> {
    Ok(area::list(db).await?)
}

pub async fn create_area(db: &DatabaseConnection, input: AreaInput) -> Result<area::Model, ServiceError> {
    let area_name = require(input.area_name, MISSING_AREA_NAME)?;

    let txn = db.begin().await?;
    let created = area::create(&txn, &area_name).await.map_err(|e| match e {
        ModelError::Unique(_) => ServiceError::Integrity(format!("Area '{area_name}' already exists")),
        other => other.into(),
    })?;
    txn.commit().await?;

    info!(area_id = created.area_id, "area created");
    Ok(created)
}

/// Delete an area together with its machines and their logs.
pub async fn delete_area(db: &DatabaseConnection, area_id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if !area::delete(&txn, area_id).await? {
        return Err(ServiceError::not_found("area"));
    }
    txn.commit().await?;

    info!(area_id, "area deleted");
    Ok(())
}
