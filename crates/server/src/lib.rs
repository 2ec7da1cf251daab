//! # Docman API Server
//!
//! Axum-based HTTP API for the Docman document management service.
//!
//! ## Modules
//!
//! - [`dto`]: Write payloads, list filters and response envelopes
//! - [`extract`]: Extractors that map rejections onto [`error::AppError`]
//! - [`handlers`]: Resource handlers
//! - [`middleware`]: Request id, access logging and authentication
//! - [`router`]: API route configuration
//! - [`storage`]: Uploaded file storage

use std::{path::PathBuf, sync::Arc};

use auth::{JwtConfig, PolicyRegistry};

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod storage;

pub use router::create_app_router;

/// Default cap on a single uploaded file.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Deployment settings the handlers consult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Directory uploaded files are written under
    pub media_root:               PathBuf,
    /// Largest accepted upload, in bytes
    pub max_upload_bytes:         usize,
    /// Check receipt level references against the referenced table on write
    pub enforce_level_references: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            media_root:               PathBuf::from("media"),
            max_upload_bytes:         DEFAULT_MAX_UPLOAD_BYTES,
            enforce_level_references: false,
        }
    }
}

/// Application state shared across request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db:         sea_orm::DbConn,
    /// JWT configuration
    pub jwt_config: JwtConfig,
    /// Resource to policy binding
    pub policies:   Arc<PolicyRegistry>,
    pub settings:   Arc<ServerSettings>,
}

impl AppState {
    pub fn new(db: sea_orm::DbConn, jwt_config: JwtConfig, policies: PolicyRegistry, settings: ServerSettings) -> Self {
        Self {
            db,
            jwt_config,
            policies: Arc::new(policies),
            settings: Arc::new(settings),
        }
    }
}
