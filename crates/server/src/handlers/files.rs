//! # Uploaded File Handlers
//!
//! `POST` takes a multipart body with a single `file` field. The blob is
//! written under the media root before the row is inserted; a failed insert
//! removes it again.

use auth::{resources, Access, Caller};
use axum::{
    extract::{multipart::Field, Multipart, State},
    http::StatusCode,
    Extension,
    Json,
};
use chrono::Utc;
use entity::uploaded_files;
use error::{AppError, OptionExt, Result};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::info;
use uuid::Uuid;

use super::{authorize, authorize_object, paginate};
use crate::{
    dto::{ListResponse, PageParams},
    extract::{ApiPath, ApiQuery},
    storage,
    AppState,
};

/// Multipart field carrying the upload
pub const FILE_FIELD: &str = "file";

/// Read one multipart field into memory, failing once it passes `max_bytes`.
async fn read_capped(mut field: Field<'_>, max_bytes: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?
    {
        if buf.len().saturating_add(chunk.len()) > max_bytes {
            return Err(AppError::payload_too_large(format!(
                "File exceeds the upload limit of {max_bytes} bytes"
            )));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

/// Pull the `file` field out of a multipart body, skipping any others.
async fn read_upload(multipart: &mut Multipart, max_bytes: usize) -> Result<(String, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let bytes = read_capped(field, max_bytes).await?;
        if bytes.is_empty() {
            return Err(AppError::validation("file: The submitted file is empty"));
        }
        return Ok((name, bytes));
    }

    Err(AppError::validation("file: No file was submitted"))
}

async fn find(state: &AppState, id: Uuid) -> Result<uploaded_files::Model> {
    uploaded_files::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_not_found("Uploaded file")
}

/// `GET /api/document-management/files`
pub async fn list(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiQuery(page): ApiQuery<PageParams>,
) -> Result<Json<ListResponse<uploaded_files::Model>>> {
    authorize(&state, resources::FILES, &caller, Access::Read)?;

    let query = uploaded_files::Entity::find()
        .order_by_desc(uploaded_files::Column::CreatedAt)
        .order_by_asc(uploaded_files::Column::Id);
    let (rows, meta) = paginate(&state.db, query, page).await?;

    Ok(Json(ListResponse::new(rows, meta)))
}

/// `POST /api/document-management/files`
pub async fn upload(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<uploaded_files::Model>)> {
    authorize(&state, resources::FILES, &caller, Access::Write)?;

    let (name, bytes) = read_upload(&mut multipart, state.settings.max_upload_bytes).await?;

    let id = Uuid::new_v4();
    let relative = storage::upload_path(Utc::now(), id, &name);
    storage::save(&state.settings.media_root, &relative, &bytes).await?;

    let active = uploaded_files::ActiveModel {
        id: Set(id),
        file: Set(relative.clone()),
        uploaded_by: Set(Some(caller.user_id)),
        ..Default::default()
    };
    let created = match active.insert(&state.db).await {
        Ok(model) => model,
        Err(err) => {
            storage::remove(&state.settings.media_root, &relative).await;
            return Err(err.into());
        },
    };

    info!(
        file_id = %created.id,
        user_id = %caller.user_id,
        size = bytes.len(),
        "File uploaded"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/document-management/files/:id`
pub async fn retrieve(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<uploaded_files::Model>> {
    let policy = authorize(&state, resources::FILES, &caller, Access::Read)?;
    let file = find(&state, id).await?;
    authorize_object(policy, &caller, Access::Read, &file)?;

    Ok(Json(file))
}

/// `DELETE /api/document-management/files/:id`
///
/// Attachment links go with the row; the blob is removed best-effort.
pub async fn destroy(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode> {
    let policy = authorize(&state, resources::FILES, &caller, Access::Write)?;
    let file = find(&state, id).await?;
    authorize_object(policy, &caller, Access::Write, &file)?;

    uploaded_files::Entity::delete_by_id(file.id)
        .exec(&state.db)
        .await?;
    storage::remove(&state.settings.media_root, &file.file).await;

    info!(file_id = %id, user_id = %caller.user_id, "File deleted");

    Ok(StatusCode::NO_CONTENT)
}
