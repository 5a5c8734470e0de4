use chrono::Utc;
use configs::LogDateDefault;
use models::{
    errors::ModelError,
    maintenance_log::{self, NewLog, EMPTY_PARTS},
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::{require, ServiceError};

pub const MISSING_FIELDS: &str = "Missing required fields";

/// Body of a create-log request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogInput {
    pub technician_name: Option<String>,
    pub total_time_spent: Option<f64>,
    pub comments: Option<String>,
    /// Any JSON value; strings are kept as-is, everything else is encoded.
    pub parts_used: Option<Value>,
}

/// Date stamped on new logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDate {
    /// Same day for every log, fixed when the service started.
    Fixed(String),
    /// Day the log is written.
    Today,
}

impl LogDate {
    /// Resolve a configured policy; `Startup` captures today's date now.
    pub fn from_policy(policy: LogDateDefault) -> Self {
        match policy {
            LogDateDefault::Startup => Self::Fixed(today()),
            LogDateDefault::Creation => Self::Today,
        }
    }

    pub fn resolve(&self) -> String {
        match self {
            Self::Fixed(day) => day.clone(),
            Self::Today => today(),
        }
    }
}

/// Current UTC calendar day as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

fn encode_parts(parts: Option<Value>) -> String {
    match parts {
        None | Some(Value::Null) => EMPTY_PARTS.to_string(),
        Some(Value::String(raw)) => raw,
        Some(other) => other.to_string(),
    }
}

/// Logs of one machine. No check that the machine exists.
pub async fn list_logs(db: &DatabaseConnection, machine_id: i32) -> Result<Vec<maintenance_log::Model>, ServiceError> {
    Ok(maintenance_log::list_by_machine(db, machine_id).await?)
}

pub async fn create_log(
    db: &DatabaseConnection,
    machine_id: i32,
    input: LogInput,
    date: &LogDate,
) -> Result<maintenance_log::Model, ServiceError> {
    let technician_name = require(input.technician_name, MISSING_FIELDS)?;
    let total_time_spent = require(input.total_time_spent, MISSING_FIELDS)?;
    let log = NewLog {
        technician_name,
        date: date.resolve(),
        total_time_spent,
        comments: input.comments.unwrap_or_default(),
        parts_used: encode_parts(input.parts_used),
    };

    let txn = db.begin().await?;
    let created = maintenance_log::create(&txn, machine_id, log).await.map_err(|e| match e {
        ModelError::ForeignKey(_) => ServiceError::Integrity(format!("Machine {machine_id} does not exist")),
        other => other.into(),
    })?;
    txn.commit().await?;

    info!(machine_id, log_id = created.log_id, "maintenance log created");
    Ok(created)
}

pub async fn delete_log(db: &DatabaseConnection, log_id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if !maintenance_log::delete(&txn, log_id).await? {
        return Err(ServiceError::not_found("maintenance log"));
    }
    txn.commit().await?;

    info!(log_id, "maintenance log deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area_service::{create_area, delete_area, AreaInput};
    use crate::machine_service::{create_machine, delete_machine, MachineInput};
    use crate::test_support::get_db;
    use serde_json::json;

    async fn pump(db: &DatabaseConnection) -> Result<(i32, i32), anyhow::Error> {
        let area = create_area(db, AreaInput { area_name: Some("Plant A".into()) }).await?;
        let machine = create_machine(
            db,
            area.area_id,
            MachineInput {
                machine_name: Some("Pump".into()),
                asset_number: Some("A-100".into()),
                ..Default::default()
            },
        )
        .await?;
        Ok((area.area_id, machine.machine_id))
    }

    fn work(tech: &str, hours: f64) -> LogInput {
        LogInput {
            technician_name: Some(tech.into()),
            total_time_spent: Some(hours),
            ..Default::default()
        }
    }

    #[test]
    fn parts_encoding() {
        assert_eq!(encode_parts(None), "{}");
        assert_eq!(encode_parts(Some(Value::Null)), "{}");
        assert_eq!(encode_parts(Some(json!("[\"seal\"]"))), "[\"seal\"]");
        assert_eq!(encode_parts(Some(json!({"seal": 2}))), r#"{"seal":2}"#);
    }

    #[test]
    fn fixed_policy_never_moves() {
        let fixed = LogDate::Fixed("2020-01-01".into());
        assert_eq!(fixed.resolve(), "2020-01-01");
        assert_eq!(LogDate::from_policy(LogDateDefault::Creation), LogDate::Today);
        match LogDate::from_policy(LogDateDefault::Startup) {
            LogDate::Fixed(day) => assert_eq!(day.len(), 10),
            other => panic!("expected fixed date, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn log_defaults() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_, machine_id) = pump(&db).await?;

        let created = create_log(&db, machine_id, work("J. Doe", 2.5), &LogDate::Today).await?;
        assert_eq!(created.date, Some(today()));
        assert_eq!(created.comments.as_deref(), Some(""));
        assert_eq!(created.parts_used.as_deref(), Some("{}"));
        assert_eq!(created.total_time_spent, 2.5);
        Ok(())
    }

    #[tokio::test]
    async fn fixed_date_is_stamped() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_, machine_id) = pump(&db).await?;
        let startup = LogDate::Fixed("2021-06-30".into());

        create_log(&db, machine_id, work("J. Doe", 1.0), &startup).await?;
        create_log(&db, machine_id, work("A. Smith", 3.0), &startup).await?;

        let logs = list_logs(&db, machine_id).await?;
        assert_eq!(logs.len(), 2);
        assert!(logs.iter().all(|l| l.date.as_deref() == Some("2021-06-30")));
        Ok(())
    }

    #[tokio::test]
    async fn missing_time_is_validation_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_, machine_id) = pump(&db).await?;

        let input = LogInput { total_time_spent: None, ..work("J. Doe", 0.0) };
        let err = create_log(&db, machine_id, input, &LogDate::Today).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == MISSING_FIELDS));
        assert!(list_logs(&db, machine_id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_machine_is_integrity_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_log(&db, 5, work("J. Doe", 1.0), &LogDate::Today).await.unwrap_err();
        assert!(matches!(err, ServiceError::Integrity(_)));
        Ok(())
    }

    #[tokio::test]
    async fn delete_log_then_cascades() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (area_id, machine_id) = pump(&db).await?;
        let first = create_log(&db, machine_id, work("J. Doe", 1.0), &LogDate::Today).await?;
        create_log(&db, machine_id, work("A. Smith", 2.0), &LogDate::Today).await?;

        delete_log(&db, first.log_id).await?;
        assert!(matches!(delete_log(&db, first.log_id).await, Err(ServiceError::NotFound(_))));
        assert_eq!(list_logs(&db, machine_id).await?.len(), 1);

        delete_machine(&db, machine_id).await?;
        assert!(list_logs(&db, machine_id).await?.is_empty());

        delete_area(&db, area_id).await?;
        Ok(())
    }
}
