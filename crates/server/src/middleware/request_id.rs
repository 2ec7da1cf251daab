//! # Request Id and Access Logging
//!
//! Assigns every request a [`RequestId`], echoes it in the response header and
//! in JSON error bodies, and logs one line per request.

use std::time::Instant;

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use error::ErrorResponse;
use logging::{log_api_request, RequestId, REQUEST_ID_HEADER};

/// Error bodies are a few hundred bytes; anything larger is passed through.
const ERROR_BODY_LIMIT: usize = 64 * 1024;

/// Request id and access log middleware
///
/// A valid incoming `x-request-id` is kept, anything else is replaced. The id
/// is stored in the request extensions for handlers that want it.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = RequestId::from_header_or_new(
        request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
    );

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;

    log_api_request!(
        request_id,
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    if response.status().is_client_error() || response.status().is_server_error() {
        response = stamp_error_body(response, &request_id).await;
    }

    response
}

/// Adds `request_id` to an [`ErrorResponse`] body. Other bodies are returned as they were.
async fn stamp_error_body(response: Response, request_id: &RequestId) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));
    if !is_json {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let Ok(bytes) = to_bytes(body, ERROR_BODY_LIMIT).await
    else {
        return Response::from_parts(parts, Body::empty());
    };

    let stamped = serde_json::from_slice::<ErrorResponse>(&bytes)
        .ok()
        .and_then(|body| serde_json::to_vec(&body.with_request_id(request_id.as_str())).ok());
    match stamped {
        Some(stamped) => {
            parts.headers.remove(header::CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(stamped))
        },
        None => Response::from_parts(parts, Body::from(bytes)),
    }
}
