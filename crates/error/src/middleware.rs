//! # Error Response Conversion
//!
//! Turns [`AppError`] into HTTP responses.
//!
//! ## Usage
//!
//! ```rust
//! use error::{AppError, ErrorHandler};
//!
//! let handler = ErrorHandler::new(false);
//! let response = handler.to_response(&AppError::not_found("Receipt not found"));
//! assert_eq!(response.status(), 404);
//! ```

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{response::ErrorResponse, AppError};

/// Error handler that converts errors to HTTP responses.
#[derive(Clone, Copy, Debug, Default)]
pub struct ErrorHandler {
    /// Whether to include server-side error details in the response.
    pub include_details: bool,
}

impl ErrorHandler {
    /// Create a new error handler.
    #[inline]
    pub fn new(include_details: bool) -> Self {
        Self {
            include_details,
        }
    }

    /// Convert an error to a response.
    ///
    /// Client errors always carry their message. Server errors are logged and
    /// reported generically unless `include_details` is set.
    pub fn to_response(&self, err: &AppError) -> Response {
        let status = err.status();
        let message = if err.is_client_error() || self.include_details {
            err.message()
        }
        else {
            tracing::error!(code = err.code(), error = %err, "Request failed");
            "Internal server error".to_string()
        };

        let body = ErrorResponse::new(err.code(), message);
        let body = serde_json::to_vec(&body).unwrap_or_default();

        let mut res = (status, body).into_response();
        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        if status == StatusCode::UNAUTHORIZED {
            res.headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        res
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response { ErrorHandler::new(false).to_response(&self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_handler() {
        let response = ErrorHandler::new(false).to_response(&AppError::not_found("User not found"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_unauthorized_sets_challenge() {
        let response = AppError::JwtExpired.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_error_handler_with_details() {
        let response = ErrorHandler::new(true).to_response(&AppError::internal("Detailed error message"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
