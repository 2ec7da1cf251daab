//! Companies Entity
//!
//! Top of the organizational hierarchy: company → brand → branch → person.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id:          Uuid,
    pub title:       String,
    pub tax_number:  String,
    pub email:       String,
    pub iban:        String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_active:   bool,
    pub metadata:    Option<Json>,
    pub created_at:  DateTimeUtc,
    pub updated_at:  DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::brands::Entity")]
    Brands,
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
}

impl Related<super::brands::Entity> for Entity {
    fn to() -> RelationDef { Relation::Brands.def() }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Users.def() }
}

uuid_timestamped_behavior!();
