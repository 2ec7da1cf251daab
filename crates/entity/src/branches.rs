//! Branches Entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id:         Uuid,
    pub name:       String,
    #[sea_orm(column_type = "Text")]
    pub address:    String,
    pub phone:      String,
    pub email:      String,
    pub brand_id:   Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brands::Entity",
        from = "Column::BrandId",
        to = "super::brands::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Brand,
    #[sea_orm(has_many = "super::people::Entity")]
    People,
}

impl Related<super::brands::Entity> for Entity {
    fn to() -> RelationDef { Relation::Brand.def() }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef { Relation::People.def() }
}

uuid_timestamped_behavior!();
