//! Receipts Entity
//!
//! A receipt is filed under one company, brand, branch or person through the
//! `(level, level_object_id)` pair. The pair is a tagged reference with no
//! foreign key behind it: `level_object_id` is stored as free text and the
//! schema accepts ids that name no row. [`Model::level_ref`] exposes the pair
//! as a typed value.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::ReceiptLevel;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "receipts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id:              Uuid,
    pub title:           String,
    #[sea_orm(column_type = "Text")]
    pub description:     String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub amount:          Option<Decimal>,
    pub currency:        Option<String>,
    pub date:            Date,
    pub level:           ReceiptLevel,
    pub level_object_id: Option<String>,
    pub created_by:      Option<Uuid>,
    pub tags:            Json,
    pub metadata:        Json,
    pub created_at:      DateTimeUtc,
    pub updated_at:      DateTimeUtc,
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
    #[sea_orm(has_many = "super::receipt_attachments::Entity")]
    ReceiptAttachments,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Creator.def() }
}

impl Related<super::uploaded_files::Entity> for Entity {
    fn to() -> RelationDef { super::receipt_attachments::Relation::UploadedFile.def() }

    fn via() -> Option<RelationDef> { Some(super::receipt_attachments::Relation::Receipt.def().rev()) }
}

uuid_timestamped_behavior!();

/// Typed view of a receipt's `(level, level_object_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LevelRef {
    Company(String),
    Brand(String),
    Branch(String),
    Person(String),
}

impl LevelRef {
    /// Pair a level with an object id.
    pub fn new(level: ReceiptLevel, object_id: impl Into<String>) -> Self {
        let object_id = object_id.into();
        match level {
            ReceiptLevel::Company => Self::Company(object_id),
            ReceiptLevel::Brand => Self::Brand(object_id),
            ReceiptLevel::Branch => Self::Branch(object_id),
            ReceiptLevel::Person => Self::Person(object_id),
        }
    }

    pub fn level(&self) -> ReceiptLevel {
        match self {
            Self::Company(_) => ReceiptLevel::Company,
            Self::Brand(_) => ReceiptLevel::Brand,
            Self::Branch(_) => ReceiptLevel::Branch,
            Self::Person(_) => ReceiptLevel::Person,
        }
    }

    /// The raw identifier, exactly as stored.
    pub fn object_id(&self) -> &str {
        match self {
            Self::Company(id) | Self::Brand(id) | Self::Branch(id) | Self::Person(id) => id,
        }
    }

    /// The identifier as a UUID, if it is one.
    pub fn uuid(&self) -> Option<Uuid> { Uuid::parse_str(self.object_id().trim()).ok() }
}

impl Model {
    /// The tagged target of this receipt, or `None` when no object id is recorded.
    pub fn level_ref(&self) -> Option<LevelRef> {
        self.level_object_id
            .as_ref()
            .map(|id| LevelRef::new(self.level, id.clone()))
    }
}
