//! People Entity
//!
//! Staff or contacts attached to a branch, optionally holding a role.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id:          Uuid,
    pub full_name:   String,
    pub national_id: String,
    #[sea_orm(column_type = "Text")]
    pub address:     String,
    pub phone:       String,
    pub email:       String,
    pub iban:        String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_active:   bool,
    pub role_id:     Option<Uuid>,
    pub branch_id:   Uuid,
    pub created_at:  DateTimeUtc,
    pub updated_at:  DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::branches::Entity",
        from = "Column::BranchId",
        to = "super::branches::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Branch,
    #[sea_orm(
        belongs_to = "super::roles::Entity",
        from = "Column::RoleId",
        to = "super::roles::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Role,
}

impl Related<super::branches::Entity> for Entity {
    fn to() -> RelationDef { Relation::Branch.def() }
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef { Relation::Role.def() }
}

uuid_timestamped_behavior!();
