//! # Resource Handlers
//!
//! Most resources are plain CRUD over one table and share the generic
//! handlers in this module through the [`Resource`] trait. Receipts and
//! uploaded files carry extra behavior and have their own handlers.
//!
//! Every handler follows the same access flow: collection-stage policies,
//! then the row is loaded (404 when missing), then object-stage policies.

pub mod documents;
pub mod files;
pub mod organization;
pub mod profile;
pub mod receipts;
pub mod records;

use std::fmt::Display;

use auth::{Access, AccessTarget, Caller, ResourcePolicy};
use axum::{extract::State, http::StatusCode, Extension, Json};
use error::{OptionExt, PaginationMeta, Result};
use sea_orm::{
    ActiveModelBehavior,
    ActiveModelTrait,
    ConnectionTrait,
    EntityTrait,
    FromQueryResult,
    IntoActiveModel,
    ModelTrait,
    PaginatorTrait,
    PrimaryKeyTrait,
    QuerySelect,
    Select,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::info;

use crate::{
    dto::{ListResponse, PageParams, WritePayload},
    extract::{ApiJson, ApiPath, ApiQuery},
    AppState,
};

/// Primary key value type of an entity.
pub type PrimaryKeyValue<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// A table exposed through the generic CRUD handlers.
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + AccessTarget
        + Serialize
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Default + Send + 'static;
    /// Path parameter identifying one row
    type Id: DeserializeOwned + Display + Send + Into<PrimaryKeyValue<Self::Entity>>;
    type Payload: WritePayload<Self::ActiveModel> + Send;
    type Filter: DeserializeOwned + Default + Send + Sync;

    /// Key into the policy registry
    const RESOURCE: &'static str;
    /// Human readable name used in error messages
    const LABEL: &'static str;

    /// Apply list filters.
    fn filter(query: Select<Self::Entity>, _filter: &Self::Filter) -> Select<Self::Entity> { query }

    /// Apply the default ordering.
    fn order(query: Select<Self::Entity>) -> Select<Self::Entity>;

    /// Record the caller as owner of a new row.
    fn set_owner(_active: &mut Self::ActiveModel, _caller: &Caller) {}
}

/// Filter for resources without list filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct NoFilter {}

/// Run the collection-stage policies of a resource.
pub(crate) fn authorize<'a>(
    state: &'a AppState,
    resource: &str,
    caller: &Caller,
    access: Access,
) -> Result<&'a ResourcePolicy> {
    let policy = state.policies.policy(resource)?;
    policy.check_collection(Some(caller), access).into_result()?;
    Ok(policy)
}

/// Run the object-stage policies against a loaded row.
pub(crate) fn authorize_object(
    policy: &ResourcePolicy,
    caller: &Caller,
    access: Access,
    target: &dyn AccessTarget,
) -> Result<()> {
    policy.check_object(Some(caller), access, target).into_result()
}

/// Fetch one page of a query together with its pagination metadata.
pub(crate) async fn paginate<E, C>(db: &C, query: Select<E>, params: PageParams) -> Result<(Vec<E::Model>, PaginationMeta)>
where
    E: EntityTrait,
    E::Model: Sync,
    C: ConnectionTrait,
{
    let total = query.clone().count(db).await?;
    let meta = PaginationMeta::new(params.page(), params.per_page(), total);
    let rows = query.offset(meta.offset()).limit(meta.per_page).all(db).await?;
    Ok((rows, meta))
}

async fn find<R: Resource>(state: &AppState, id: R::Id) -> Result<R::Model> {
    R::Entity::find_by_id(id).one(&state.db).await?.ok_or_not_found(R::LABEL)
}

/// `GET /{resource}`
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiQuery(page): ApiQuery<PageParams>,
    ApiQuery(filter): ApiQuery<R::Filter>,
) -> Result<Json<ListResponse<R::Model>>> {
    authorize(&state, R::RESOURCE, &caller, Access::Read)?;

    let query = R::order(R::filter(R::Entity::find(), &filter));
    let (rows, meta) = paginate(&state.db, query, page).await?;

    Ok(Json(ListResponse::new(rows, meta)))
}

/// `POST /{resource}`
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiJson(payload): ApiJson<R::Payload>,
) -> Result<(StatusCode, Json<R::Model>)> {
    authorize(&state, R::RESOURCE, &caller, Access::Write)?;

    let mut active = <R::ActiveModel as Default>::default();
    payload.apply(&mut active);
    R::set_owner(&mut active, &caller);

    let created = active.insert(&state.db).await?;
    info!(resource = R::RESOURCE, user_id = %caller.user_id, "Record created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /{resource}/:id`
pub async fn retrieve<R: Resource>(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiPath(id): ApiPath<R::Id>,
) -> Result<Json<R::Model>> {
    let policy = authorize(&state, R::RESOURCE, &caller, Access::Read)?;
    let row = find::<R>(&state, id).await?;
    authorize_object(policy, &caller, Access::Read, &row)?;

    Ok(Json(row))
}

/// `PUT /{resource}/:id`, a full replace of the writable columns
pub async fn replace<R: Resource>(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiPath(id): ApiPath<R::Id>,
    ApiJson(payload): ApiJson<R::Payload>,
) -> Result<Json<R::Model>> {
    let policy = authorize(&state, R::RESOURCE, &caller, Access::Write)?;
    let label = id.to_string();
    let row = find::<R>(&state, id).await?;
    authorize_object(policy, &caller, Access::Write, &row)?;

    let mut active: R::ActiveModel = row.into_active_model();
    payload.apply(&mut active);

    let updated = active.update(&state.db).await?;
    info!(resource = R::RESOURCE, id = %label, user_id = %caller.user_id, "Record replaced");

    Ok(Json(updated))
}

/// `DELETE /{resource}/:id`
pub async fn destroy<R: Resource>(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    ApiPath(id): ApiPath<R::Id>,
) -> Result<StatusCode> {
    let policy = authorize(&state, R::RESOURCE, &caller, Access::Write)?;
    let label = id.to_string();
    let row = find::<R>(&state, id).await?;
    authorize_object(policy, &caller, Access::Write, &row)?;

    let active: R::ActiveModel = row.into_active_model();
    active.delete(&state.db).await?;
    info!(resource = R::RESOURCE, id = %label, user_id = %caller.user_id, "Record deleted");

    Ok(StatusCode::NO_CONTENT)
}
