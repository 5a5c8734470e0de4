use configs::LogDateDefault;
use sea_orm::DatabaseConnection;
use service::maintenance_service::LogDate;

/// Handles shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub log_date: LogDate,
}

impl AppState {
    pub fn new(db: DatabaseConnection, policy: LogDateDefault) -> Self {
        Self { db, log_date: LogDate::from_policy(policy) }
    }
}
