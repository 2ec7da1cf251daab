//! # Error Traits
//!
//! Conversion helpers for error handling.

use crate::{AppError, Result};

/// Extension methods for Result types.
pub trait ResultExt<T> {
    fn context<C: ToString>(self, context: C) -> Result<T>;
    fn log_error(self) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn context<C: ToString>(self, context: C) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            err.context(context)
        })
    }

    fn log_error(self) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            tracing::error!(error = %err, "Error occurred");
            err
        })
    }
}

/// Extension methods for lookups that may come back empty.
pub trait OptionExt<T> {
    /// Map `None` to a not found error naming the resource.
    fn ok_or_not_found(self, resource: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, resource: &str) -> Result<T> {
        self.ok_or_else(|| AppError::not_found(format!("{} not found", resource)))
    }
}
