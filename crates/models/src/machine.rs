use sea_orm::{entity::prelude::*, sea_query::ForeignKeyAction, ConnectionTrait, NotSet, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{area, maintenance_log};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "machines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub machine_id: i32,
    pub area_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub machine_name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub asset_number: String,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub location: Option<String>,
    // Free-form text, never parsed.
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub last_maintenance_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Area,
    MaintenanceLog,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Area => Entity::belongs_to(area::Entity)
                .from(Column::AreaId)
                .to(area::Column::AreaId)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::MaintenanceLog => Entity::has_many(maintenance_log::Entity).into(),
        }
    }
}

impl Related<area::Entity> for Entity {
    fn to() -> RelationDef { Relation::Area.def() }
}

impl Related<maintenance_log::Entity> for Entity {
    fn to() -> RelationDef { Relation::MaintenanceLog.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    area_id: i32,
    machine_name: &str,
    asset_number: &str,
    location: &str,
    last_maintenance_date: &str,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        machine_id: NotSet,
        area_id: Set(area_id),
        machine_name: Set(machine_name.to_string()),
        asset_number: Set(asset_number.to_string()),
        location: Set(Some(location.to_string())),
        last_maintenance_date: Set(Some(last_maintenance_date.to_string())),
    };
    Ok(am.insert(db).await?)
}

/// Machines under an area; empty when the area has none or does not exist.
pub async fn list_by_area<C: ConnectionTrait>(db: &C, area_id: i32) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Column::AreaId.eq(area_id))
        .order_by_asc(Column::MachineId)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn delete<C: ConnectionTrait>(db: &C, machine_id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(machine_id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
