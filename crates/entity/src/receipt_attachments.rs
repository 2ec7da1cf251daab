//! Receipt Attachments Entity
//!
//! Join table between receipts and uploaded files.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "receipt_attachments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub receipt_id:       Uuid,
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub uploaded_file_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::receipts::Entity",
        from = "Column::ReceiptId",
        to = "super::receipts::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Receipt,
    #[sea_orm(
        belongs_to = "super::uploaded_files::Entity",
        from = "Column::UploadedFileId",
        to = "super::uploaded_files::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    UploadedFile,
}

impl Related<super::receipts::Entity> for Entity {
    fn to() -> RelationDef { Relation::Receipt.def() }
}

impl Related<super::uploaded_files::Entity> for Entity {
    fn to() -> RelationDef { Relation::UploadedFile.def() }
}

impl ActiveModelBehavior for ActiveModel {}
