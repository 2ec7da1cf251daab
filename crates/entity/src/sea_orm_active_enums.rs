//! Choice-set columns stored as short strings.
//!
//! Serde names match the stored values, so the JSON representation and the
//! database representation of each variant are identical.

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Entity type a receipt is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum ReceiptLevel {
    #[sea_orm(string_value = "company")]
    Company,
    #[sea_orm(string_value = "brand")]
    Brand,
    #[default]
    #[sea_orm(string_value = "branch")]
    Branch,
    #[sea_orm(string_value = "person")]
    Person,
}

impl fmt::Display for ReceiptLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptLevel::Company => write!(f, "company"),
            ReceiptLevel::Brand => write!(f, "brand"),
            ReceiptLevel::Branch => write!(f, "branch"),
            ReceiptLevel::Person => write!(f, "person"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    #[sea_orm(string_value = "contract")]
    Contract,
    #[sea_orm(string_value = "promissory_note")]
    PromissoryNote,
    #[sea_orm(string_value = "report")]
    Report,
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateType::Contract => write!(f, "contract"),
            TemplateType::PromissoryNote => write!(f, "promissory_note"),
            TemplateType::Report => write!(f, "report"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum CalendarCategory {
    #[sea_orm(string_value = "upcoming_payment")]
    UpcomingPayment,
    #[sea_orm(string_value = "overdue_payment")]
    OverduePayment,
    #[sea_orm(string_value = "new_contract")]
    NewContract,
    #[sea_orm(string_value = "promissory_note")]
    PromissoryNote,
    #[sea_orm(string_value = "report_reminder")]
    ReportReminder,
}

impl fmt::Display for CalendarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarCategory::UpcomingPayment => write!(f, "upcoming_payment"),
            CalendarCategory::OverduePayment => write!(f, "overdue_payment"),
            CalendarCategory::NewContract => write!(f, "new_contract"),
            CalendarCategory::PromissoryNote => write!(f, "promissory_note"),
            CalendarCategory::ReportReminder => write!(f, "report_reminder"),
        }
    }
}

/// Document kind an [`events`](crate::events) row points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[sea_orm(string_value = "promissory_note")]
    PromissoryNote,
    #[sea_orm(string_value = "contract")]
    Contract,
    #[sea_orm(string_value = "report")]
    Report,
    #[sea_orm(string_value = "receipt")]
    Receipt,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::PromissoryNote => write!(f, "promissory_note"),
            EventType::Contract => write!(f, "contract"),
            EventType::Report => write!(f, "report"),
            EventType::Receipt => write!(f, "receipt"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    #[sea_orm(string_value = "upcoming")]
    Upcoming,
    #[sea_orm(string_value = "delayed")]
    Delayed,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "reminder")]
    Reminder,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStatus::Upcoming => write!(f, "upcoming"),
            EventStatus::Delayed => write!(f, "delayed"),
            EventStatus::Completed => write!(f, "completed"),
            EventStatus::Reminder => write!(f, "reminder"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    #[sea_orm(string_value = "financial")]
    Financial,
    #[sea_orm(string_value = "payment")]
    Payment,
    #[sea_orm(string_value = "performance")]
    Performance,
    #[sea_orm(string_value = "general")]
    General,
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportType::Financial => write!(f, "financial"),
            ReportType::Payment => write!(f, "payment"),
            ReportType::Performance => write!(f, "performance"),
            ReportType::General => write!(f, "general"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "approved")]
    Approved,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::Completed => write!(f, "completed"),
            ReportStatus::Approved => write!(f, "approved"),
        }
    }
}
