//! # JWT Token Management
//!
//! Bearer token encoding and validation. Tokens are issued elsewhere; the
//! service only needs to verify them and resolve the subject to a user.

use std::{
    collections::HashSet,
    time::{Duration, SystemTime},
};

use cuid2::CuidConstructor;
use error::{AppError, Result};
use jsonwebtoken::{errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT settings shared by the server and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtConfig {
    /// Base64 encoded HMAC secret
    pub secret:             String,
    pub expiration_seconds: u64,
    pub issuer:             String,
    pub audience:           String,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// User email
    pub email: String,

    /// Token issuer
    pub iss: String,

    /// Token audience
    pub aud: String,

    /// Expiration time (Unix timestamp)
    pub exp: u64,

    /// Issued at (Unix timestamp)
    pub iat: u64,

    /// Unique token ID
    pub jti: String,
}

impl Claims {
    /// Parse the subject as a user id.
    pub fn user_id(&self) -> Result<Uuid> { Uuid::parse_str(&self.sub).map_err(|_| AppError::JwtInvalidToken) }
}

/// Creates a new JWT access token
///
/// # Errors
///
/// Returns an error if the secret is not valid base64 or encoding fails.
pub fn create_access_token(config: &JwtConfig, user_id: Uuid, email: &str) -> Result<String> {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| AppError::internal(format!("Failed to get current time: {}", e)))?;

    let expiration = now + Duration::from_secs(config.expiration_seconds);

    let claims = Claims {
        sub:   user_id.to_string(),
        email: email.to_string(),
        iss:   config.issuer.clone(),
        aud:   config.audience.clone(),
        exp:   expiration.as_secs(),
        iat:   now.as_secs(),
        jti:   CuidConstructor::new().with_length(32).create_id(),
    };

    let key = EncodingKey::from_base64_secret(&config.secret)
        .map_err(|e| AppError::config(format!("Invalid JWT secret: {}", e)))?;

    jsonwebtoken::encode(&Header::default(), &claims, &key)
        .map_err(|e| AppError::internal(format!("Failed to encode token: {}", e)))
}

/// Validates a JWT token and returns the claims
///
/// # Errors
///
/// Returns [`AppError::JwtExpired`], [`AppError::JwtInvalidSignature`] or
/// [`AppError::JwtInvalidToken`] depending on why validation failed.
pub fn validate_token(config: &JwtConfig, token: &str) -> Result<Claims> {
    let decoding_key = DecodingKey::from_base64_secret(&config.secret)
        .map_err(|e| AppError::config(format!("Invalid JWT secret: {}", e)))?;

    let mut validation = Validation::default();
    validation.iss = Some(HashSet::from([config.issuer.clone()]));
    validation.aud = Some(HashSet::from([config.audience.clone()]));
    validation.validate_exp = true;

    let data = jsonwebtoken::decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        match e.kind() {
            ErrorKind::ExpiredSignature => AppError::JwtExpired,
            ErrorKind::InvalidSignature => AppError::JwtInvalidSignature,
            _ => AppError::JwtInvalidToken,
        }
    })?;

    Ok(data.claims)
}

/// Extracts the Bearer token from the Authorization header
///
/// Returns `None` when the scheme is not `Bearer` or the token is empty.
pub fn extract_bearer_token(auth_header: &str) -> Option<String> {
    let token = auth_header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
