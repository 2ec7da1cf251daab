//! Roles Entity
//!
//! `permissions` holds an open set of capability names. Either a JSON array of
//! names or a JSON object whose keys are the names is accepted.

use std::collections::BTreeSet;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id:           Uuid,
    pub name:         String,
    pub display_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description:  Option<String>,
    pub permissions:  Json,
    pub created_at:   DateTimeUtc,
    pub updated_at:   DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people::Entity")]
    People,
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef { Relation::People.def() }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Users.def() }
}

uuid_timestamped_behavior!();

impl Model {
    /// Permission names granted by this role.
    ///
    /// Array entries that are not strings, and any other JSON shape, grant nothing.
    pub fn permission_names(&self) -> BTreeSet<String> {
        match &self.permissions {
            Json::Array(items) => {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            },
            Json::Object(map) => map.keys().cloned().collect(),
            _ => BTreeSet::new(),
        }
    }
}
