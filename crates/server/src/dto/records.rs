//! # Event and Report Data Transfer Objects

use chrono::{DateTime, NaiveDate, Utc};
use entity::{
    events,
    reports,
    sea_orm_active_enums::{EventStatus, EventType, ReportStatus, ReportType},
};
use sea_orm::{prelude::Decimal, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::{money_10_2, WritePayload};

/// Event create/replace payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct EventPayload {
    #[serde(rename = "type")]
    pub event_type:  EventType,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title:       String,
    pub date:        DateTime<Utc>,
    /// Identifier of the related document, not checked against any table
    #[validate(length(min = 1, message = "Related id is required"))]
    pub related_id:  String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "money_10_2"))]
    pub amount:      Option<Decimal>,
    #[serde(default)]
    pub status:      EventStatus,
}

impl WritePayload<events::ActiveModel> for EventPayload {
    fn apply(self, active: &mut events::ActiveModel) {
        active.event_type = Set(self.event_type);
        active.title = Set(self.title);
        active.date = Set(self.date);
        active.related_id = Set(self.related_id);
        active.description = Set(self.description);
        active.amount = Set(self.amount);
        active.status = Set(self.status);
    }
}

/// Event list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct EventFilter {
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub status:     Option<EventStatus>,
}

/// Report create/replace payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct ReportPayload {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name:         String,
    #[serde(rename = "type")]
    pub report_type:  ReportType,
    pub start_date:   NaiveDate,
    pub end_date:     NaiveDate,
    #[validate(custom(function = "money_10_2"))]
    pub total_amount: Decimal,
    #[serde(default)]
    pub status:       ReportStatus,
    #[serde(default)]
    pub company_id:   Option<Uuid>,
    #[serde(default)]
    pub brand_id:     Option<Uuid>,
    #[serde(default)]
    pub branch_id:    Option<Uuid>,
    #[serde(default)]
    pub person_id:    Option<Uuid>,
}

impl WritePayload<reports::ActiveModel> for ReportPayload {
    fn apply(self, active: &mut reports::ActiveModel) {
        active.name = Set(self.name);
        active.report_type = Set(self.report_type);
        active.start_date = Set(self.start_date);
        active.end_date = Set(self.end_date);
        active.total_amount = Set(self.total_amount);
        active.status = Set(self.status);
        active.company_id = Set(self.company_id);
        active.brand_id = Set(self.brand_id);
        active.branch_id = Set(self.branch_id);
        active.person_id = Set(self.person_id);
    }
}

/// Report list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ReportFilter {
    #[serde(rename = "type")]
    pub report_type: Option<ReportType>,
    pub status:      Option<ReportStatus>,
}
