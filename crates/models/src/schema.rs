//! Table bootstrap.
//!
//! Creates `areas`, `machines` and `maintenance_logs` from the entity
//! definitions when they do not exist yet. Parents come before children so
//! the cascading foreign keys resolve.
use sea_orm::{ConnectionTrait, DbErr, Schema};
use tracing::debug;

use crate::{area, machine, maintenance_log};

pub async fn create_all<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let tables = [
        schema.create_table_from_entity(area::Entity),
        schema.create_table_from_entity(machine::Entity),
        schema.create_table_from_entity(maintenance_log::Entity),
    ];
    for mut table in tables {
        table.if_not_exists();
        db.execute(backend.build(&table)).await?;
    }
    debug!("database tables initialized");
    Ok(())
}
