use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::machine;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "areas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub area_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub area_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Machine,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Machine => Entity::has_many(machine::Entity).into() }
    }
}

impl Related<machine::Entity> for Entity {
    fn to() -> RelationDef { Relation::Machine.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, area_name: &str) -> Result<Model, ModelError> {
    let am = ActiveModel { area_id: NotSet, area_name: Set(area_name.to_string()) };
    Ok(am.insert(db).await?)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::AreaId).all(db).await?)
}

/// Delete by id; owned machines and their logs go with it. `false` if absent.
pub async fn delete<C: ConnectionTrait>(db: &C, area_id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(area_id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
