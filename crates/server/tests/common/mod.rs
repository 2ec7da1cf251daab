//! # Common Test Utilities
//!
//! A migrated in-memory SQLite database, fixture users and helpers that send
//! requests through the full router.

#![allow(dead_code)]

use std::sync::Once;

use auth::{create_access_token, JwtConfig, PolicyRegistry};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use base64::Engine as _;
use entity::{roles, users};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DbConn, Set};
use serde_json::{json, Value};
use server::{create_app_router, AppState, ServerSettings};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

static INIT: Once = Once::new();

/// Initialize test logging (run once per test binary)
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret:             base64::engine::general_purpose::STANDARD.encode("docman-test-secret-with-some-length"),
        expiration_seconds: 600,
        issuer:             "docman".to_string(),
        audience:           "docman-api".to_string(),
    }
}

/// Router and state over a fresh database
pub struct TestApp {
    pub state:  AppState,
    pub router: Router,
    /// Media root, removed when the app is dropped
    pub media:  TempDir,
}

impl TestApp {
    pub async fn new() -> Self { Self::with_settings(|_| {}).await }

    pub async fn with_settings(configure: impl FnOnce(&mut ServerSettings)) -> Self {
        init_test_env();

        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let media = tempfile::tempdir().unwrap();
        let mut settings = ServerSettings {
            media_root: media.path().to_path_buf(),
            ..ServerSettings::default()
        };
        configure(&mut settings);

        let state = AppState::new(db, jwt_config(), PolicyRegistry::default(), settings);
        let router = create_app_router(state.clone());

        Self {
            state,
            router,
            media,
        }
    }

    pub fn db(&self) -> &DbConn { &self.state.db }

    pub async fn role(&self, permissions: &[&str]) -> roles::Model {
        roles::ActiveModel {
            name: Set(format!("role-{}", Uuid::new_v4().simple())),
            display_name: Set("Test role".to_string()),
            permissions: Set(json!(permissions)),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .unwrap()
    }

    /// Insert a user and return a bearer token for it.
    pub async fn user(&self, profile: UserSpec) -> (users::Model, String) {
        let user = users::ActiveModel {
            username: Set(format!("user-{}", Uuid::new_v4().simple())),
            email: Set("user@example.com".to_string()),
            first_name: Set("Test".to_string()),
            last_name: Set("User".to_string()),
            is_staff: Set(profile.is_staff),
            is_active: Set(true),
            role_id: Set(profile.role_id),
            company_id: Set(profile.company_id),
            brand_id: Set(None),
            branch_id: Set(None),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .unwrap();

        let token = create_access_token(&self.state.jwt_config, user.id, &user.email).unwrap();
        (user, token)
    }

    pub async fn staff(&self) -> (users::Model, String) {
        self.user(UserSpec {
            is_staff: true,
            ..UserSpec::default()
        })
        .await
    }

    pub async fn clerk_with(&self, permissions: &[&str]) -> (users::Model, String) {
        let role = self.role(permissions).await;
        self.user(UserSpec {
            role_id: Some(role.id),
            ..UserSpec::default()
        })
        .await
    }

    /// Send a JSON request and decode the JSON response (`Null` when empty).
    pub async fn send(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => {
                builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap()
            },
            None => builder.body(Body::empty()).unwrap(),
        };

        self.dispatch(request).await
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(token), None).await
    }

    /// Upload `bytes` as the `file` field of a multipart body.
    pub async fn upload(&self, token: &str, file_name: &str, bytes: &[u8]) -> (StatusCode, Value) {
        const BOUNDARY: &str = "docman-test-boundary";

        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n").as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/document-management/files")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        }
        else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserSpec {
    pub is_staff:   bool,
    pub role_id:    Option<Uuid>,
    pub company_id: Option<Uuid>,
}

pub fn company_body(title: &str) -> Value {
    json!({
        "title": title,
        "tax_number": "1234567890",
        "email": "info@example.com",
        "iban": "TR330006100519786457841326"
    })
}

pub fn receipt_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Monthly expense",
        "currency": "TRY",
        "date": "2024-03-01"
    })
}

/// Collect one string field from every result of a list response.
pub fn field_of(list: &Value, field: &str) -> Vec<String> {
    list["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row[field].as_str().unwrap().to_string())
        .collect()
}
