#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Isolated in-memory store with all tables created.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_memory().await?;
    models::schema::create_all(&db).await?;
    Ok(db)
}
