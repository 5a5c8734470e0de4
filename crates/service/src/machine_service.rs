use models::{errors::ModelError, machine};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use tracing::info;

use crate::errors::{require, ServiceError};

pub const MISSING_FIELDS: &str = "Missing required fields";

/// Body of a create-machine request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MachineInput {
    pub machine_name: Option<String>,
    pub asset_number: Option<String>,
    pub location: Option<String>,
    pub last_maintenance_date: Option<String>,
}

/// Machines of one area. No check that the area exists.
pub async fn list_machines(db: &DatabaseConnection, area_id: i32) -> Result<Vec<machine::Model>, ServiceError> {
    Ok(machine::list_by_area(db, area_id).await?)
}

pub async fn create_machine(
    db: &DatabaseConnection,
    area_id: i32,
    input: MachineInput,
) -> Result<machine::Model, ServiceError> {
    let machine_name = require(input.machine_name, MISSING_FIELDS)?;
    let asset_number = require(input.asset_number, MISSING_FIELDS)?;
    let location = input.location.unwrap_or_default();
    let last_maintenance_date = input.last_maintenance_date.unwrap_or_default();

    let txn = db.begin().await?;
    let created = machine::create(&txn, area_id, &machine_name, &asset_number, &location, &last_maintenance_date)
        .await
        .map_err(|e| match e {
            ModelError::Unique(_) => ServiceError::Integrity(format!("Asset number '{asset_number}' already exists")),
            ModelError::ForeignKey(_) => ServiceError::Integrity(format!("Area {area_id} does not exist")),
            other => other.into(),
        })?;
    txn.commit().await?;

    info!(area_id, machine_id = created.machine_id, "machine created");
    Ok(created)
}

/// Delete a machine together with its maintenance logs.
pub async fn delete_machine(db: &DatabaseConnection, machine_id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if !machine::delete(&txn, machine_id).await? {
        return Err(ServiceError::not_found("machine"));
    }
    txn.commit().await?;

    info!(machine_id, "machine deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area_service::{create_area, delete_area, AreaInput};
    use crate::test_support::get_db;

    fn pump(asset: &str) -> MachineInput {
        MachineInput {
            machine_name: Some("Pump".into()),
            asset_number: Some(asset.into()),
            ..Default::default()
        }
    }

    async fn plant(db: &DatabaseConnection, name: &str) -> Result<i32, anyhow::Error> {
        let area = create_area(db, AreaInput { area_name: Some(name.into()) }).await?;
        Ok(area.area_id)
    }

    #[tokio::test]
    async fn optional_fields_default_to_empty() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let area_id = plant(&db, "Plant A").await?;

        let created = create_machine(&db, area_id, pump("A-100")).await?;
        let listed = list_machines(&db, area_id).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].machine_id, created.machine_id);
        assert_eq!(listed[0].location.as_deref(), Some(""));
        assert_eq!(listed[0].last_maintenance_date.as_deref(), Some(""));
        Ok(())
    }

    #[tokio::test]
    async fn optional_fields_are_stored_verbatim() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let area_id = plant(&db, "Plant A").await?;

        let input = MachineInput {
            location: Some("Bay 4".into()),
            last_maintenance_date: Some("last spring".into()),
            ..pump("A-100")
        };
        let created = create_machine(&db, area_id, input).await?;
        assert_eq!(created.location.as_deref(), Some("Bay 4"));
        assert_eq!(created.last_maintenance_date.as_deref(), Some("last spring"));
        Ok(())
    }

    #[tokio::test]
    async fn missing_asset_number_creates_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let area_id = plant(&db, "Plant A").await?;

        let input = MachineInput { asset_number: None, ..pump("unused") };
        let err = create_machine(&db, area_id, input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == MISSING_FIELDS));
        assert!(list_machines(&db, area_id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_area_is_integrity_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_machine(&db, 77, pump("A-100")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Integrity(ref m) if m.contains("77")), "got {err:?}");
        assert!(list_machines(&db, 77).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_asset_number_is_integrity_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = plant(&db, "Plant A").await?;
        let b = plant(&db, "Plant B").await?;
        create_machine(&db, a, pump("A-100")).await?;

        let err = create_machine(&db, b, pump("A-100")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Integrity(_)));
        assert!(list_machines(&db, b).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_machine_and_area_cascade() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let area_id = plant(&db, "Plant A").await?;
        let first = create_machine(&db, area_id, pump("A-100")).await?;
        create_machine(&db, area_id, pump("A-101")).await?;

        delete_machine(&db, first.machine_id).await?;
        assert_eq!(list_machines(&db, area_id).await?.len(), 1);
        assert!(matches!(delete_machine(&db, first.machine_id).await, Err(ServiceError::NotFound(_))));

        delete_area(&db, area_id).await?;
        assert!(list_machines(&db, area_id).await?.is_empty());
        Ok(())
    }
}
