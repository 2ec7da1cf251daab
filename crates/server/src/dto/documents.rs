//! # Document Data Transfer Objects
//!
//! Payloads, filters and records for receipts, templates, calendar events
//! and uploaded files.

use chrono::{DateTime, NaiveDate, Utc};
use entity::{
    calendar_events,
    receipts,
    sea_orm_active_enums::{CalendarCategory, ReceiptLevel, TemplateType},
    templates,
};
use sea_orm::{prelude::Decimal, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{empty_list, empty_object, money_14_2, WritePayload};

/// Receipt as returned by the API: every column plus the attachment ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    #[serde(flatten)]
    pub receipt:     receipts::Model,
    pub attachments: Vec<Uuid>,
}

/// Receipt create/replace payload
///
/// `attachments` replaces the whole attachment set.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct ReceiptPayload {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title:           String,
    pub description:     String,
    #[serde(default)]
    #[validate(custom(function = "money_14_2"))]
    pub amount:          Option<Decimal>,
    #[serde(default)]
    #[validate(length(max = 10, message = "Currency must not exceed 10 characters"))]
    pub currency:        Option<String>,
    pub date:            NaiveDate,
    #[serde(default)]
    pub level:           ReceiptLevel,
    #[serde(default)]
    #[validate(length(max = 100, message = "Level object id must not exceed 100 characters"))]
    pub level_object_id: Option<String>,
    #[serde(default)]
    pub attachments:     Vec<Uuid>,
    #[serde(default = "empty_list")]
    pub tags:            serde_json::Value,
    #[serde(default = "empty_object")]
    pub metadata:        serde_json::Value,
}

impl WritePayload<receipts::ActiveModel> for ReceiptPayload {
    fn apply(self, active: &mut receipts::ActiveModel) {
        active.title = Set(self.title);
        active.description = Set(self.description);
        active.amount = Set(self.amount);
        active.currency = Set(self.currency);
        active.date = Set(self.date);
        active.level = Set(self.level);
        active.level_object_id = Set(self.level_object_id);
        active.tags = Set(self.tags);
        active.metadata = Set(self.metadata);
    }
}

/// Receipt list filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReceiptFilter {
    pub level:           Option<ReceiptLevel>,
    pub level_object_id: Option<String>,
}

/// Template create/replace payload
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct TemplatePayload {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title:         String,
    pub template_type: TemplateType,
    pub content_html:  String,
    #[serde(default = "empty_list")]
    pub placeholders:  serde_json::Value,
    #[serde(default)]
    pub usage_count:   i32,
    #[serde(default = "empty_object")]
    pub versioning:    serde_json::Value,
}

impl WritePayload<templates::ActiveModel> for TemplatePayload {
    fn apply(self, active: &mut templates::ActiveModel) {
        active.title = Set(self.title);
        active.template_type = Set(self.template_type);
        active.content_html = Set(self.content_html);
        active.placeholders = Set(self.placeholders);
        active.usage_count = Set(self.usage_count);
        active.versioning = Set(self.versioning);
    }
}

/// Template list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TemplateFilter {
    pub template_type: Option<TemplateType>,
}

/// Calendar event create/replace payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CalendarEventPayload {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title:                 String,
    #[serde(default)]
    pub description:           Option<String>,
    pub start:                 DateTime<Utc>,
    #[serde(default)]
    pub end:                   Option<DateTime<Utc>>,
    pub category:              CalendarCategory,
    #[serde(default)]
    #[validate(length(max = 100, message = "Related document type must not exceed 100 characters"))]
    pub related_document_type: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100, message = "Related document id must not exceed 100 characters"))]
    pub related_document_id:   Option<String>,
    #[serde(default)]
    pub related_company_id:    Option<Uuid>,
    #[serde(default)]
    pub related_brand_id:      Option<Uuid>,
    #[serde(default)]
    pub related_branch_id:     Option<Uuid>,
    #[serde(default)]
    pub related_person_id:     Option<Uuid>,
}

impl WritePayload<calendar_events::ActiveModel> for CalendarEventPayload {
    fn apply(self, active: &mut calendar_events::ActiveModel) {
        active.title = Set(self.title);
        active.description = Set(self.description);
        active.start = Set(self.start);
        active.end = Set(self.end);
        active.category = Set(self.category);
        active.related_document_type = Set(self.related_document_type);
        active.related_document_id = Set(self.related_document_id);
        active.related_company_id = Set(self.related_company_id);
        active.related_brand_id = Set(self.related_brand_id);
        active.related_branch_id = Set(self.related_branch_id);
        active.related_person_id = Set(self.related_person_id);
    }
}

/// Calendar event list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CalendarEventFilter {
    pub category: Option<CalendarCategory>,
}
