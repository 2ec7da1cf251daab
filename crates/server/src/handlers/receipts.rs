//! # Receipt Handlers
//!
//! Receipts carry a set of attached uploads. The set is read from
//! `receipt_attachments` on every response and replaced wholesale on every
//! write, inside the same transaction as the receipt row.

use std::collections::{BTreeSet, HashMap};

use auth::{resources, Access, Caller};
use axum::{extract::State, http::StatusCode, Extension, Json};
use entity::{
    branches,
    brands,
    companies,
    people,
    receipt_attachments,
    receipts::{self, LevelRef},
    uploaded_files,
};
use error::{AppError, OptionExt, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    IntoActiveModel,
    PaginatorTrait,
    QueryFilter,
    QueryOrder,
    QuerySelect,
    Set,
    TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use super::{authorize, authorize_object, paginate};
use crate::{
    dto::{
        documents::{ReceiptFilter, ReceiptPayload, ReceiptRecord},
        ListResponse,
        PageParams,
        WritePayload,
    },
    extract::{ApiJson, ApiPath, ApiQuery},
    AppState,
};

/// Attachment ids of one receipt, sorted.
async fn attachment_ids<C: ConnectionTrait>(db: &C, receipt_id: Uuid) -> Result<Vec<Uuid>> {
    let ids = receipt_attachments::Entity::find()
        .select_only()
        .column(receipt_attachments::Column::UploadedFileId)
        .filter(receipt_attachments::Column::ReceiptId.eq(receipt_id))
        .order_by_asc(receipt_attachments::Column::UploadedFileId)
        .into_tuple::<Uuid>()
        .all(db)
        .await?;
    Ok(ids)
}

/// Pair each receipt with its attachment ids using one query for the page.
async fn with_attachments<C: ConnectionTrait>(db: &C, rows: Vec<receipts::Model>) -> Result<Vec<ReceiptRecord>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let links = receipt_attachments::Entity::find()
        .filter(receipt_attachments::Column::ReceiptId.is_in(rows.iter().map(|r| r.id)))
        .order_by_asc(receipt_attachments::Column::UploadedFileId)
        .all(db)
        .await?;

    let mut by_receipt: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for link in links {
        by_receipt
            .entry(link.receipt_id)
            .or_default()
            .push(link.uploaded_file_id);
    }

    Ok(rows
        .into_iter()
        .map(|receipt| {
            let attachments = by_receipt.remove(&receipt.id).unwrap_or_default();
            ReceiptRecord {
                receipt,
                attachments,
            }
        })
        .collect())
}

/// Replace the attachment set of a receipt.
///
/// Every id must name an uploaded file.
async fn replace_attachments<C: ConnectionTrait>(db: &C, receipt_id: Uuid, requested: &[Uuid]) -> Result<Vec<Uuid>> {
    let wanted: BTreeSet<Uuid> = requested.iter().copied().collect();

    if !wanted.is_empty() {
        let found: BTreeSet<Uuid> = uploaded_files::Entity::find()
            .select_only()
            .column(uploaded_files::Column::Id)
            .filter(uploaded_files::Column::Id.is_in(wanted.iter().copied()))
            .into_tuple::<Uuid>()
            .all(db)
            .await?
            .into_iter()
            .collect();

        let missing: Vec<String> = wanted.difference(&found).map(Uuid::to_string).collect();
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "attachments: unknown uploaded file id(s): {}",
                missing.join(", ")
            )));
        }
    }

    receipt_attachments::Entity::delete_many()
        .filter(receipt_attachments::Column::ReceiptId.eq(receipt_id))
        .exec(db)
        .await?;

    if !wanted.is_empty() {
        let links = wanted.iter().map(|file_id| {
            receipt_attachments::ActiveModel {
                receipt_id:       Set(receipt_id),
                uploaded_file_id: Set(*file_id),
            }
        });
        receipt_attachments::Entity::insert_many(links)
            .exec_without_returning(db)
            .await?;
    }

    Ok(wanted.into_iter().collect())
}

/// Check that a level reference names an existing row of the tagged table.
async fn check_level_reference<C: ConnectionTrait>(db: &C, level_ref: &LevelRef) -> Result<()> {
    let id = level_ref.uuid().ok_or_else(|| {
        AppError::validation(format!(
            "level_object_id: '{}' is not a valid {} id",
            level_ref.object_id(),
            level_ref.level()
        ))
    })?;

    let count = match level_ref {
        LevelRef::Company(_) => companies::Entity::find_by_id(id).count(db).await?,
        LevelRef::Brand(_) => brands::Entity::find_by_id(id).count(db).await?,
        LevelRef::Branch(_) => branches::Entity::find_by_id(id).count(db).await?,
        LevelRef::Person(_) => people::Entity::find_by_id(id).count(db).await?,
    };

    if count == 0 {
        return Err(AppError::validation(format!(
            "level_object_id: no {} with id {}",
            level_ref.level(),
            id
        )));
    }
    Ok(())
}

/// Split the attachment list off a payload and check its level reference.
async fn prepare(state: &AppState, mut payload: ReceiptPayload) -> Result<(ReceiptPayload, Vec<Uuid>)> {
    let attachments = std::mem::take(&mut payload.attachments);

    if state.settings.enforce_level_references {
        if let Some(object_id) = &payload.level_object_id {
            check_level_reference(&state.db, &LevelRef::new(payload.level, object_id.clone())).await?;
        }
    }

    Ok((payload, attachments))
}

async fn find(state: &AppState, id: Uuid) -> Result<receipts::Model> {
    receipts::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_not_found("Receipt")
}

/// `GET /api/document-management/receipts`
pub async fn list(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiQuery(page): ApiQuery<PageParams>,
    ApiQuery(filter): ApiQuery<ReceiptFilter>,
) -> Result<Json<ListResponse<ReceiptRecord>>> {
    authorize(&state, resources::RECEIPTS, &caller, Access::Read)?;

    let mut query = receipts::Entity::find();
    if let Some(level) = filter.level {
        query = query.filter(receipts::Column::Level.eq(level));
    }
    if let Some(object_id) = filter.level_object_id {
        query = query.filter(receipts::Column::LevelObjectId.eq(object_id));
    }
    let query = query
        .order_by_desc(receipts::Column::Date)
        .order_by_asc(receipts::Column::Id);

    let (rows, meta) = paginate(&state.db, query, page).await?;
    let records = with_attachments(&state.db, rows).await?;

    Ok(Json(ListResponse::new(records, meta)))
}

/// `POST /api/document-management/receipts`
pub async fn create(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiJson(payload): ApiJson<ReceiptPayload>,
) -> Result<(StatusCode, Json<ReceiptRecord>)> {
    authorize(&state, resources::RECEIPTS, &caller, Access::Write)?;
    let (payload, attachments) = prepare(&state, payload).await?;

    let txn = state.db.begin().await?;

    let mut active = <receipts::ActiveModel as Default>::default();
    payload.apply(&mut active);
    active.created_by = Set(Some(caller.user_id));
    let receipt = active.insert(&txn).await?;
    let attachments = replace_attachments(&txn, receipt.id, &attachments).await?;

    txn.commit().await?;

    info!(
        receipt_id = %receipt.id,
        user_id = %caller.user_id,
        attachments = attachments.len(),
        "Receipt created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ReceiptRecord {
            receipt,
            attachments,
        }),
    ))
}

/// `GET /api/document-management/receipts/:id`
pub async fn retrieve(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ReceiptRecord>> {
    let policy = authorize(&state, resources::RECEIPTS, &caller, Access::Read)?;
    let receipt = find(&state, id).await?;
    authorize_object(policy, &caller, Access::Read, &receipt)?;

    let attachments = attachment_ids(&state.db, receipt.id).await?;
    Ok(Json(ReceiptRecord {
        receipt,
        attachments,
    }))
}

/// `PUT /api/document-management/receipts/:id`
pub async fn replace(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ReceiptPayload>,
) -> Result<Json<ReceiptRecord>> {
    let policy = authorize(&state, resources::RECEIPTS, &caller, Access::Write)?;
    let receipt = find(&state, id).await?;
    authorize_object(policy, &caller, Access::Write, &receipt)?;
    let (payload, attachments) = prepare(&state, payload).await?;

    let txn = state.db.begin().await?;

    let mut active = receipt.into_active_model();
    payload.apply(&mut active);
    let receipt = active.update(&txn).await?;
    let attachments = replace_attachments(&txn, receipt.id, &attachments).await?;

    txn.commit().await?;

    info!(receipt_id = %receipt.id, user_id = %caller.user_id, "Receipt replaced");

    Ok(Json(ReceiptRecord {
        receipt,
        attachments,
    }))
}

/// `DELETE /api/document-management/receipts/:id`
pub async fn destroy(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode> {
    let policy = authorize(&state, resources::RECEIPTS, &caller, Access::Write)?;
    let receipt = find(&state, id).await?;
    authorize_object(policy, &caller, Access::Write, &receipt)?;

    receipts::Entity::delete_by_id(receipt.id)
        .exec(&state.db)
        .await?;
    info!(receipt_id = %id, user_id = %caller.user_id, "Receipt deleted");

    Ok(StatusCode::NO_CONTENT)
}
