//! # Uploaded File Storage
//!
//! Blobs live under the media root at `uploads/YYYY/MM/DD/<uuid>-<name>`.
//! The database stores that relative path; nothing is deduplicated.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use error::{AppError, Result, ResultExt as _};
use tracing::{debug, warn};
use uuid::Uuid;

/// Longest file name component kept from the client supplied name.
const MAX_NAME_LEN: usize = 100;

/// Reduce a client supplied file name to a safe single path component.
///
/// Directory parts are dropped and anything outside `[A-Za-z0-9._-]`
/// becomes `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            }
            else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        return "upload".to_string();
    }
    cleaned.chars().take(MAX_NAME_LEN).collect()
}

/// Storage path, relative to the media root, for a new upload.
pub fn upload_path(now: DateTime<Utc>, id: Uuid, original_name: &str) -> String {
    format!(
        "uploads/{}/{}-{}",
        now.format("%Y/%m/%d"),
        id,
        sanitize_file_name(original_name)
    )
}

fn resolve(media_root: &Path, relative: &str) -> Result<PathBuf> {
    let relative = Path::new(relative);
    if relative.is_absolute() ||
        relative
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
    {
        return Err(AppError::internal("Stored file path escapes the media root"));
    }
    Ok(media_root.join(relative))
}

/// Write a blob, creating its dated directory.
pub async fn save(media_root: &Path, relative: &str, bytes: &[u8]) -> Result<()> {
    let path = resolve(media_root, relative)?;
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .context("Creating upload directory")?;
    }
    logging::measure_duration!("storage", "write upload", {
        tokio::fs::write(&path, bytes)
            .await
            .context("Writing upload")?
    });
    debug!(path = %path.display(), size = bytes.len(), "Stored upload");
    Ok(())
}

/// Remove a blob. Failures are logged and otherwise ignored.
pub async fn remove(media_root: &Path, relative: &str) {
    let path = match resolve(media_root, relative) {
        Ok(path) => path,
        Err(err) => {
            warn!(file = relative, error = %err, "Refusing to remove stored file");
            return;
        },
    };

    if let Err(err) = tokio::fs::remove_file(&path).await {
        warn!(path = %path.display(), error = %err, "Failed to remove stored file");
    }
}
