use anyhow::Result;
use sea_orm::EntityTrait;

use super::setup_test_db;
use crate::errors::ModelError;
use crate::maintenance_log::NewLog;
use crate::{area, machine, maintenance_log};

fn log_for(tech: &str) -> NewLog {
    NewLog {
        technician_name: tech.to_string(),
        date: "2024-03-01".to_string(),
        total_time_spent: 1.0,
        comments: String::new(),
        parts_used: "{}".to_string(),
    }
}

#[tokio::test]
async fn duplicate_area_name_is_unique_violation() -> Result<()> {
    let db = setup_test_db().await?;
    area::create(&db, "Plant A").await?;

    let err = area::create(&db, "Plant A").await.unwrap_err();
    assert!(matches!(err, ModelError::Unique(_)), "got {err:?}");
    assert!(err.is_integrity());
    assert_eq!(area::list(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn duplicate_asset_number_is_unique_violation() -> Result<()> {
    let db = setup_test_db().await?;
    let a = area::create(&db, "Plant A").await?;
    let b = area::create(&db, "Plant B").await?;
    machine::create(&db, a.area_id, "Pump", "A-100", "", "").await?;

    let err = machine::create(&db, b.area_id, "Other pump", "A-100", "", "").await.unwrap_err();
    assert!(matches!(err, ModelError::Unique(_)), "got {err:?}");
    assert!(machine::list_by_area(&db, b.area_id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn machine_under_missing_area_is_fk_violation() -> Result<()> {
    let db = setup_test_db().await?;

    let err = machine::create(&db, 42, "Ghost", "G-1", "", "").await.unwrap_err();
    assert!(matches!(err, ModelError::ForeignKey(_)), "got {err:?}");
    assert!(machine::list_by_area(&db, 42).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn log_under_missing_machine_is_fk_violation() -> Result<()> {
    let db = setup_test_db().await?;

    let err = maintenance_log::create(&db, 7, log_for("J. Doe")).await.unwrap_err();
    assert!(matches!(err, ModelError::ForeignKey(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn deleting_area_cascades_to_machines_and_logs() -> Result<()> {
    let db = setup_test_db().await?;
    let plant = area::create(&db, "Plant A").await?;
    let keep = area::create(&db, "Plant B").await?;
    let pump = machine::create(&db, plant.area_id, "Pump", "A-100", "", "").await?;
    let fan = machine::create(&db, plant.area_id, "Fan", "A-101", "", "").await?;
    let lathe = machine::create(&db, keep.area_id, "Lathe", "B-100", "", "").await?;
    maintenance_log::create(&db, pump.machine_id, log_for("J. Doe")).await?;
    maintenance_log::create(&db, fan.machine_id, log_for("J. Doe")).await?;
    let kept_log = maintenance_log::create(&db, lathe.machine_id, log_for("A. Smith")).await?;

    assert!(area::delete(&db, plant.area_id).await?);

    assert!(machine::list_by_area(&db, plant.area_id).await?.is_empty());
    assert!(maintenance_log::list_by_machine(&db, pump.machine_id).await?.is_empty());
    assert!(maintenance_log::list_by_machine(&db, fan.machine_id).await?.is_empty());

    let remaining = maintenance_log::Entity::find().all(&db).await?;
    assert_eq!(remaining, vec![kept_log]);
    assert_eq!(machine::list_by_area(&db, keep.area_id).await?, vec![lathe]);
    Ok(())
}

#[tokio::test]
async fn deleting_machine_cascades_to_logs() -> Result<()> {
    let db = setup_test_db().await?;
    let plant = area::create(&db, "Plant A").await?;
    let pump = machine::create(&db, plant.area_id, "Pump", "A-100", "", "").await?;
    maintenance_log::create(&db, pump.machine_id, log_for("J. Doe")).await?;
    maintenance_log::create(&db, pump.machine_id, log_for("A. Smith")).await?;

    assert!(machine::delete(&db, pump.machine_id).await?);
    assert!(maintenance_log::Entity::find().all(&db).await?.is_empty());
    assert_eq!(area::list(&db).await?.len(), 1);
    Ok(())
}
