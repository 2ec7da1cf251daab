//! # Logging Configuration
//!
//! Configuration for the logging subsystem.
//! Supports environment variables and programmatic configuration.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt as tracing_fmt, prelude::*, EnvFilter, Layer, Registry};

/// Output format of the console layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("Unknown log format '{}'", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        };
        f.write_str(name)
    }
}

/// Logging configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Filter directive (`info`, `debug`, `server=debug,sqlx=warn`)
    #[serde(default = "default_level")]
    pub level: String,

    /// Console output format
    #[serde(default)]
    pub format: LogFormat,

    /// Optional log file path, rotated daily
    #[serde(default)]
    pub log_file: Option<String>,

    /// Environment (development, testing, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_level() -> String { "info".to_string() }

fn default_environment() -> String { "development".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level:       default_level(),
            format:      LogFormat::default(),
            log_file:    None,
            environment: default_environment(),
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables, falling back to the given values.
    ///
    /// `RUST_LOG`, `DOCMAN_LOG_FORMAT`, `DOCMAN_LOG_FILE` and `DOCMAN_ENV` take precedence.
    /// An unparseable format falls back to JSON.
    pub fn from_env(level: &str, format: &str, log_file: Option<&str>) -> Self {
        let format = std::env::var("DOCMAN_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| format.to_string());

        Self {
            level:       std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
            format:      format.parse().unwrap_or_default(),
            log_file:    std::env::var("DOCMAN_LOG_FILE")
                .ok()
                .or_else(|| log_file.map(|s| s.to_string())),
            environment: std::env::var("DOCMAN_ENV").unwrap_or_else(|_| default_environment()),
        }
    }

    /// The filter built from `level`. Invalid directives fall back to `info`.
    pub fn filter(&self) -> EnvFilter { EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info")) }

    /// Build the tracing subscriber from this configuration.
    pub fn build(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::with_capacity(2);

        layers.push(match self.format {
            LogFormat::Json => {
                tracing_fmt::layer()
                    .json()
                    .with_timer(tracing_fmt::time::UtcTime::rfc_3339())
                    .boxed()
            },
            LogFormat::Pretty => {
                tracing_fmt::layer()
                    .pretty()
                    .with_timer(tracing_fmt::time::UtcTime::rfc_3339())
                    .boxed()
            },
            LogFormat::Compact => {
                tracing_fmt::layer()
                    .compact()
                    .with_timer(tracing_fmt::time::UtcTime::rfc_3339())
                    .boxed()
            },
        });

        if let Some(ref log_file) = self.log_file {
            let path = Path::new(log_file);
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "docman.log".to_string());

            let appender = tracing_appender::rolling::daily(directory, file_name);
            layers.push(
                tracing_fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(appender)
                    .boxed(),
            );
        }

        Box::new(Registry::default().with(layers).with(self.filter()))
    }
}
