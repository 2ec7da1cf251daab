//! # Rejection Handlers
//!
//! Converts Axum extractor rejections into [`AppError`] values so they share
//! the standard error envelope.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

use crate::AppError;

/// Handle JSON body rejections.
///
/// Turns serde messages like "missing field `title` at line 1 column 2" into
/// "Missing required field: title".
pub fn handle_json_rejection(rejection: JsonRejection) -> AppError {
    let error_message = rejection.body_text();

    let message = error_message
        .find("missing field `")
        .and_then(|start| {
            let rest = &error_message[start + 15 ..];
            rest.find('`')
                .map(|end| format!("Missing required field: {}", &rest[.. end]))
        })
        .unwrap_or(error_message);

    AppError::bad_request(message)
}

/// Handle query string rejections.
pub fn handle_query_rejection(rejection: QueryRejection) -> AppError {
    AppError::bad_request(format!(
        "Query string deserialization error: {}",
        rejection.body_text()
    ))
}

/// Handle path parameter rejections, e.g. a malformed UUID.
pub fn handle_path_rejection(rejection: PathRejection) -> AppError {
    AppError::bad_request(format!("Invalid path parameter: {}", rejection.body_text()))
}
