use sea_orm::DatabaseConnection;



/// Uniqueness, foreign keys and cascading deletes
pub mod integrity_tests;


/// Fresh in-memory store with all tables created.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_memory().await?;
    crate::schema::create_all(&db).await?;
    Ok(db)
}
