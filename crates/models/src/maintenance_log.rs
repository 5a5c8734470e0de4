use sea_orm::{entity::prelude::*, sea_query::ForeignKeyAction, ConnectionTrait, NotSet, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::machine;

/// Stored in `parts_used` when the client sends nothing.
pub const EMPTY_PARTS: &str = "{}";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maintenance_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub log_id: i32,
    pub machine_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub technician_name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub date: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub total_time_spent: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    /// JSON-encoded parts data, kept as text.
    #[sea_orm(column_type = "Text", nullable)]
    pub parts_used: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Machine,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Machine => Entity::belongs_to(machine::Entity)
                .from(Column::MachineId)
                .to(machine::Column::MachineId)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<machine::Entity> for Entity {
    fn to() -> RelationDef { Relation::Machine.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a new log row.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLog {
    pub technician_name: String,
    pub date: String,
    pub total_time_spent: f64,
    pub comments: String,
    pub parts_used: String,
}

pub async fn create<C: ConnectionTrait>(db: &C, machine_id: i32, log: NewLog) -> Result<Model, ModelError> {
    let am = ActiveModel {
        log_id: NotSet,
        machine_id: Set(machine_id),
        technician_name: Set(log.technician_name),
        date: Set(Some(log.date)),
        total_time_spent: Set(log.total_time_spent),
        comments: Set(Some(log.comments)),
        parts_used: Set(Some(log.parts_used)),
    };
    Ok(am.insert(db).await?)
}

pub async fn list_by_machine<C: ConnectionTrait>(db: &C, machine_id: i32) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Column::MachineId.eq(machine_id))
        .order_by_asc(Column::LogId)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn delete<C: ConnectionTrait>(db: &C, log_id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(log_id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
