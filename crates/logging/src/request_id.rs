//! # Request ID Tracking
//!
//! Identifiers attached to every request and echoed back in the
//! `x-request-id` response header. Uses CUID2 for collision-resistant,
//! URL-safe identifiers.

use std::{fmt, str::FromStr};

/// Header carrying the request id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// A request ID type using CUID2.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random request ID.
    #[inline]
    pub fn new() -> Self { Self(cuid2::create_id()) }

    /// Accept an incoming header value if it looks like an id we could have issued.
    ///
    /// Values must be 16 to 64 characters of ASCII alphanumerics, `-` or `_`.
    pub fn from_header(value: &str) -> Option<Self> {
        let value = value.trim();
        let valid = (16 ..= 64).contains(&value.len()) &&
            value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| Self(value.to_string()))
    }

    /// Use the incoming header when valid, otherwise generate a fresh id.
    pub fn from_header_or_new(value: Option<&str>) -> Self { value.and_then(Self::from_header).unwrap_or_default() }

    /// Get the request ID as a string.
    #[inline]
    pub fn as_str(&self) -> &str { &self.0 }

    /// Consume and return the inner string.
    #[inline]
    pub fn into_string(self) -> String { self.0 }
}

impl Default for RequestId {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl FromStr for RequestId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::from_header(s).ok_or_else(|| "Invalid request ID format".to_string()) }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}
