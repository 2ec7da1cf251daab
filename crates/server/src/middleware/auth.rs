//! # Authentication Middleware
//!
//! JWT authentication middleware for protecting API endpoints.

use auth::{extract_bearer_token, load_caller, validate_token, Caller};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use error::AppError;
use logging::log_auth_event;

use crate::AppState;

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the JWT token
/// 3. Loads the caller context for the token subject
/// 4. Adds the [`Caller`] to request extensions
///
/// Requests with missing or invalid tokens, or whose subject is not an
/// active user, are rejected with 401.
pub async fn auth_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let authenticated = authenticate(&state, request.headers()).await;
    match authenticated {
        Ok(caller) => {
            request.extensions_mut().insert(caller);
            next.run(request).await
        },
        Err(err) => err.into_response(),
    }
}

async fn authenticate(state: &AppState, headers: &HeaderMap) -> error::Result<Caller> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?
        .to_str()
        .map_err(|_| AppError::unauthorized("Invalid authorization header encoding"))?;

    let token =
        extract_bearer_token(auth_header).ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

    let claims = validate_token(&state.jwt_config, &token)?;
    let user_id = claims.user_id()?;

    match load_caller(&state.db, user_id).await? {
        Some(caller) => {
            tracing::debug!(user_id = %caller.user_id, is_staff = caller.is_staff, "Caller authenticated");
            Ok(caller)
        },
        None => {
            log_auth_event!("token_rejected", user_id, false);
            Err(AppError::unauthorized("User not found or inactive"))
        },
    }
}
