//! # CLI Configuration
//!
//! Database and server settings read from `DOCMAN_*` environment variables.

use std::{
    net::SocketAddr,
    path::PathBuf,
    str::FromStr,
};

use auth::{JwtConfig, PolicyRegistry};
use base64::Engine as _;
use server::{ServerSettings, DEFAULT_MAX_UPLOAD_BYTES};

/// Default access token lifetime
const DEFAULT_JWT_EXPIRATION_SECONDS: u64 = 3600;

/// Errors that can occur when reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("Missing required environment variable {var}")]
    Missing {
        /// Variable name
        var: &'static str,
    },

    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {var}: {value}")]
    Invalid {
        /// Variable name
        var:   &'static str,
        /// The rejected value
        value: String,
    },
}

impl From<ConfigError> for error::AppError {
    fn from(err: ConfigError) -> Self { error::AppError::config(err) }
}

fn var(name: &str) -> Option<String> { std::env::var(name).ok().filter(|v| !v.trim().is_empty()) }

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match var(name) {
        Some(value) => {
            value.trim().parse().map_err(|_| {
                ConfigError::Invalid {
                    var: name,
                    value,
                }
            })
        },
        None => Ok(default),
    }
}

fn parse_bool(name: &'static str) -> Result<bool, ConfigError> {
    match var(name) {
        None => Ok(false),
        Some(value) => {
            match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => {
                    Err(ConfigError::Invalid {
                        var: name,
                        value,
                    })
                },
            }
        },
    }
}

/// Database configuration for CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full connection URL, used as-is when set
    pub url:      Option<String>,
    /// Database host address
    pub host:     String,
    /// Database port number
    pub port:     u16,
    /// Database name
    pub database: String,
    /// Database username
    pub username: String,
    /// Database password
    pub password: String,
    /// SSL mode
    pub ssl_mode: String,
}

impl DatabaseConfig {
    /// Read `DOCMAN_DATABASE_URL`, or the individual `DOCMAN_DATABASE_*` parts.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url:      var("DOCMAN_DATABASE_URL"),
            host:     var("DOCMAN_DATABASE_HOST").unwrap_or_else(|| "localhost".to_owned()),
            port:     parse_var("DOCMAN_DATABASE_PORT", 5432)?,
            database: var("DOCMAN_DATABASE_NAME").unwrap_or_else(|| "docman".to_owned()),
            username: var("DOCMAN_DATABASE_USER").unwrap_or_else(|| "docman".to_owned()),
            password: var("DOCMAN_DATABASE_PASSWORD").unwrap_or_default(),
            ssl_mode: var("DOCMAN_DATABASE_SSL_MODE").unwrap_or_else(|| "prefer".to_owned()),
        })
    }

    /// The connection URL.
    pub fn database_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => build_database_url(self),
        }
    }
}

/// Builds a PostgreSQL URL from the individual parts.
pub fn build_database_url(config: &DatabaseConfig) -> String {
    format!(
        "postgres://{}:{}@{}:{}/{}?sslmode={}",
        percent_encode_userinfo(&config.username),
        percent_encode_userinfo(&config.password),
        config.host,
        config.port,
        config.database,
        config.ssl_mode
    )
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn percent_encode_userinfo(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut result = String::with_capacity(s.len().saturating_mul(3));
    for byte in s.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            result.push(char::from(byte));
        }
        else {
            result.push('%');
            result.push(char::from(HEX[usize::from(byte >> 4)]));
            result.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    result
}

/// Settings the API server needs beyond the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub jwt:                      JwtConfig,
    pub media_root:               PathBuf,
    pub max_upload_bytes:         usize,
    pub enforce_level_references: bool,
    /// JSON file with per-resource policy overrides
    pub policy_file:              Option<PathBuf>,
}

impl ServerConfig {
    /// Read the server settings. `DOCMAN_JWT_SECRET` is required and must be base64.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = var("DOCMAN_JWT_SECRET").ok_or(ConfigError::Missing {
            var: "DOCMAN_JWT_SECRET",
        })?;
        if base64::engine::general_purpose::STANDARD
            .decode(secret.trim())
            .is_err()
        {
            return Err(ConfigError::Invalid {
                var:   "DOCMAN_JWT_SECRET",
                value: "<not valid base64>".to_owned(),
            });
        }

        Ok(Self {
            jwt:                      JwtConfig {
                secret:             secret.trim().to_owned(),
                expiration_seconds: parse_var("DOCMAN_JWT_EXPIRATION_SECONDS", DEFAULT_JWT_EXPIRATION_SECONDS)?,
                issuer:             var("DOCMAN_JWT_ISSUER").unwrap_or_else(|| "docman".to_owned()),
                audience:           var("DOCMAN_JWT_AUDIENCE").unwrap_or_else(|| "docman-api".to_owned()),
            },
            media_root:               var("DOCMAN_MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("media")),
            max_upload_bytes:         parse_var("DOCMAN_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            enforce_level_references: parse_bool("DOCMAN_ENFORCE_LEVEL_REFERENCES")?,
            policy_file:              var("DOCMAN_POLICY_FILE").map(PathBuf::from),
        })
    }

    /// Handler settings for [`server::AppState`].
    pub fn settings(&self) -> ServerSettings {
        ServerSettings {
            media_root:               self.media_root.clone(),
            max_upload_bytes:         self.max_upload_bytes,
            enforce_level_references: self.enforce_level_references,
        }
    }

    /// The default policy binding with the policy file applied, if any.
    pub fn policies(&self) -> error::Result<PolicyRegistry> {
        match &self.policy_file {
            Some(path) => PolicyRegistry::from_file(path),
            None => Ok(PolicyRegistry::default()),
        }
    }
}

/// Parses a host and port into a SocketAddr.
///
/// IPv6 hosts are bracketed before the port is appended.
pub fn parse_socket_addr(host: &str, port: u16) -> Result<SocketAddr, std::net::AddrParseError> {
    let addr_str = if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    }
    else {
        format!("{}:{}", host, port)
    };
    addr_str.parse()
}
