//! # CLI Validate Command
//!
//! Checks the environment before the server is started.

use error::{AppError, Result};
use tracing::info;

use crate::config::{DatabaseConfig, ServerConfig};

/// Validates the configuration, reporting every problem at once.
pub fn validate() -> Result<()> {
    let mut problems = Vec::new();

    match DatabaseConfig::from_env() {
        Ok(config) if config.url.is_none() && config.password.is_empty() => {
            problems.push("Either DOCMAN_DATABASE_URL or DOCMAN_DATABASE_PASSWORD must be set".to_owned());
        },
        Ok(_) => {},
        Err(e) => problems.push(e.to_string()),
    }

    match ServerConfig::from_env() {
        Ok(config) => {
            if let Err(e) = config.policies() {
                problems.push(e.message());
            }
        },
        Err(e) => problems.push(e.to_string()),
    }

    if !problems.is_empty() {
        return Err(AppError::config(problems.join("; ")));
    }

    info!(target: "validate", "Configuration is valid");
    Ok(())
}
