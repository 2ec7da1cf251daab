//! Calendar Events Entity
//!
//! Each of the four `related_*` columns is a real nullable foreign key. Setting
//! more than one is allowed.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::CalendarCategory;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "calendar_events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id:                    Uuid,
    pub title:                 String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description:           Option<String>,
    pub start:                 DateTimeUtc,
    pub end:                   Option<DateTimeUtc>,
    pub category:              CalendarCategory,
    pub related_document_type: Option<String>,
    pub related_document_id:   Option<String>,
    pub related_company_id:    Option<Uuid>,
    pub related_brand_id:      Option<Uuid>,
    pub related_branch_id:     Option<Uuid>,
    pub related_person_id:     Option<Uuid>,
    pub created_by:            Option<Uuid>,
    pub created_at:            DateTimeUtc,
    pub updated_at:            DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::RelatedCompanyId",
        to = "super::companies::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::brands::Entity",
        from = "Column::RelatedBrandId",
        to = "super::brands::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Brand,
    #[sea_orm(
        belongs_to = "super::branches::Entity",
        from = "Column::RelatedBranchId",
        to = "super::branches::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Branch,
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::RelatedPersonId",
        to = "super::people::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Person,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Creator,
}

uuid_timestamped_behavior!();
