//! Templates Entity
//!
//! HTML document templates with their placeholder names and a free-form
//! version history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::TemplateType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id:            Uuid,
    pub title:         String,
    pub template_type: TemplateType,
    #[sea_orm(column_type = "Text")]
    pub content_html:  String,
    pub placeholders:  Json,
    pub created_by:    Option<Uuid>,
    pub usage_count:   i32,
    pub versioning:    Json,
    pub created_at:    DateTimeUtc,
    pub updated_at:    DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Creator,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Creator.def() }
}

uuid_timestamped_behavior!();
