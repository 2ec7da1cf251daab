//! # Data Transfer Objects
//!
//! Write payloads, list filters and response envelopes. Read responses use
//! the entity models directly: every column is serialized as stored.

pub mod documents;
pub mod organization;
pub mod records;

use std::borrow::Cow;

use error::PaginationMeta;
use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidationError;

/// Default page size for list endpoints
pub const DEFAULT_PER_PAGE: u64 = 20;
/// Largest page size a client may request
pub const MAX_PER_PAGE: u64 = 100;

/// Pagination query parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageParams {
    /// Page number (1-based)
    pub page:     Option<u64>,
    /// Items per page
    pub per_page: Option<u64>,
}

impl PageParams {
    /// Get page number (default: 1)
    #[must_use]
    pub fn page(&self) -> u64 { self.page.unwrap_or(1).max(1) }

    /// Get items per page (default: 20, range 1..=100)
    #[must_use]
    pub fn per_page(&self) -> u64 { self.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE) }
}

/// Response for list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Whether the operation was successful
    pub success:    bool,
    /// Records on this page
    pub results:    Vec<T>,
    /// Pagination info
    pub pagination: PaginationMeta,
}

impl<T> ListResponse<T> {
    pub fn new(results: Vec<T>, pagination: PaginationMeta) -> Self {
        Self {
            success: true,
            results,
            pagination,
        }
    }
}

/// The authenticated caller as returned by `/api/auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerProfile {
    pub id:          Uuid,
    pub username:    String,
    pub email:       String,
    pub is_staff:    bool,
    pub role_id:     Option<Uuid>,
    /// Permission names granted by the caller's role
    pub permissions: Vec<String>,
    pub company_id:  Option<Uuid>,
    pub brand_id:    Option<Uuid>,
    pub branch_id:   Option<Uuid>,
}

impl From<&auth::Caller> for CallerProfile {
    fn from(caller: &auth::Caller) -> Self {
        Self {
            id:          caller.user_id,
            username:    caller.username.clone(),
            email:       caller.email.clone(),
            is_staff:    caller.is_staff,
            role_id:     caller.role_id,
            permissions: caller.permissions.iter().map(str::to_string).collect(),
            company_id:  caller.company_id,
            brand_id:    caller.brand_id,
            branch_id:   caller.branch_id,
        }
    }
}

/// A write payload that fills the writable columns of an active model.
///
/// Ids, timestamps and ownership columns are never written from a payload.
pub trait WritePayload<A>: serde::de::DeserializeOwned + validator::Validate {
    fn apply(self, active: &mut A);
}

/// Decimal places stored by every money column
const MONEY_SCALE: u32 = 2;

/// Check that `value` fits a `NUMERIC(max_digits, 2)` column without rounding.
fn check_money(value: &Decimal, max_digits: u32) -> Result<(), ValidationError> {
    if value.normalize().scale() > MONEY_SCALE {
        let mut err = ValidationError::new("decimal_places");
        err.message = Some(Cow::from(format!(
            "Ensure that there are no more than {MONEY_SCALE} decimal places"
        )));
        return Err(err);
    }

    let whole_digits = max_digits - MONEY_SCALE;
    if value.abs() >= Decimal::from(10_i64.pow(whole_digits)) {
        let mut err = ValidationError::new("max_whole_digits");
        err.message = Some(Cow::from(format!(
            "Ensure that there are no more than {whole_digits} digits before the decimal point"
        )));
        return Err(err);
    }
    Ok(())
}

/// `NUMERIC(14, 2)`
pub(crate) fn money_14_2(value: &Decimal) -> Result<(), ValidationError> { check_money(value, 14) }

/// `NUMERIC(10, 2)`
pub(crate) fn money_10_2(value: &Decimal) -> Result<(), ValidationError> { check_money(value, 10) }

pub(crate) fn default_true() -> bool { true }

pub(crate) fn empty_list() -> serde_json::Value { serde_json::Value::Array(Vec::new()) }

pub(crate) fn empty_object() -> serde_json::Value { serde_json::Value::Object(serde_json::Map::new()) }
