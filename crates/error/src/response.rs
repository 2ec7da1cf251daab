//! # API Response Types
//!
//! Successful calls return the record itself, or a list envelope carrying
//! [`PaginationMeta`]. Failures share one body:
//!
//! ```json
//! { "status": "error", "code": "NOT_FOUND", "message": "Receipt not found", "request_id": "..." }
//! ```

use serde::{Deserialize, Serialize};

/// Pagination metadata.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PaginationMeta {
    /// Current page number (1-indexed).
    pub page: u64,

    /// Number of items per page.
    pub per_page: u64,

    /// Total number of items.
    pub total_items: u64,

    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginationMeta {
    /// Maximum allowed page number.
    pub const MAX_PAGE: u64 = 1_000_000;

    /// Create a new pagination meta.
    ///
    /// `page` is clamped to `1..=MAX_PAGE` and `per_page` to at least 1.
    pub fn new(page: u64, per_page: u64, total_items: u64) -> Self {
        let page = page.clamp(1, Self::MAX_PAGE);
        let per_page = per_page.max(1);
        Self {
            page,
            per_page,
            total_items,
            total_pages: total_items.div_ceil(per_page),
        }
    }

    /// Offset of the first row on this page, saturating on overflow.
    pub fn offset(&self) -> u64 { (self.page - 1).saturating_mul(self.per_page) }
}

/// Error response body.
///
/// # Example
///
/// ```rust
/// use error::ErrorResponse;
///
/// let body = ErrorResponse::new("NOT_FOUND", "Receipt not found").with_request_id("req-1");
/// let json = serde_json::to_value(&body).unwrap();
/// assert_eq!(json["status"], "error");
/// assert_eq!(json["request_id"], "req-1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: String,

    /// Error code.
    pub code: String,

    /// Error message.
    pub message: String,

    /// Request ID for correlation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Create an error body without a request id.
    #[inline]
    pub fn new(code: impl ToString, message: impl ToString) -> Self {
        Self {
            status:     "error".to_string(),
            code:       code.to_string(),
            message:    message.to_string(),
            request_id: None,
        }
    }

    /// Attach the id of the request that failed.
    pub fn with_request_id(mut self, id: impl ToString) -> Self {
        self.request_id = Some(id.to_string());
        self
    }
}
