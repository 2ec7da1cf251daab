//! Uploaded Files Entity
//!
//! `file` is the storage path relative to the media root
//! (`uploads/YYYY/MM/DD/<name>`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "uploaded_files")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id:          Uuid,
    pub file:        String,
    pub uploaded_by: Option<Uuid>,
    pub created_at:  DateTimeUtc,
    pub updated_at:  DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UploadedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Uploader,
    #[sea_orm(has_many = "super::receipt_attachments::Entity")]
    ReceiptAttachments,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Uploader.def() }
}

impl Related<super::receipts::Entity> for Entity {
    fn to() -> RelationDef { super::receipt_attachments::Relation::Receipt.def() }

    fn via() -> Option<RelationDef> { Some(super::receipt_attachments::Relation::UploadedFile.def().rev()) }
}

uuid_timestamped_behavior!();
