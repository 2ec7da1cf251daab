//! Events Entity
//!
//! Timeline entries about documents. `(event_type, related_id)` is a tagged
//! reference to a document of that kind; `related_id` is free text and is
//! never checked against any table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{EventStatus, EventType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:          i32,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub event_type:  EventType,
    pub title:       String,
    pub date:        DateTimeUtc,
    pub related_id:  String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub amount:      Option<Decimal>,
    pub status:      EventStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
