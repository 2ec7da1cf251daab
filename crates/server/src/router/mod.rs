//! # API Router Configuration
//!
//! Configures API routes for Docman.

use axum::{
    extract::DefaultBodyLimit,
    handler::Handler,
    middleware,
    routing::{get, MethodRouter},
    Router,
};

use crate::{
    handlers::{
        self,
        documents::{CalendarEventResource, TemplateResource},
        files,
        organization::{BranchResource, BrandResource, CompanyResource, PersonResource, RoleResource},
        profile,
        receipts,
        records::{EventResource, ReportResource},
        Resource,
    },
    middleware::{auth::auth_middleware, request_id::request_id_middleware},
    AppState,
};

/// Room for multipart framing on top of the upload cap
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// `GET`/`POST` on the collection of a generic resource
fn collection<R: Resource>() -> MethodRouter<AppState> { get(handlers::list::<R>).post(handlers::create::<R>) }

/// `GET`/`PUT`/`DELETE` on one row of a generic resource
fn member<R: Resource>() -> MethodRouter<AppState> {
    get(handlers::retrieve::<R>)
        .put(handlers::replace::<R>)
        .delete(handlers::destroy::<R>)
}

/// Mount both routes of a generic resource under `path`.
fn resource<R: Resource>(router: Router<AppState>, path: &str) -> Router<AppState> {
    router
        .route(path, collection::<R>())
        .route(&format!("{path}/:id"), member::<R>())
}

/// Creates the API router with all routes
///
/// Every route here requires a bearer token.
pub fn create_router(state: AppState) -> Router {
    let upload_limit = state
        .settings
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    let mut api = Router::new().route("/api/auth/me", get(profile::me));

    api = resource::<CompanyResource>(api, "/api/companies");
    api = resource::<BrandResource>(api, "/api/brands");
    api = resource::<BranchResource>(api, "/api/branches");
    api = resource::<RoleResource>(api, "/api/roles");
    api = resource::<PersonResource>(api, "/api/people");
    api = resource::<EventResource>(api, "/api/events");
    api = resource::<ReportResource>(api, "/api/reports");

    api = resource::<TemplateResource>(api, "/api/document-management/templates");
    api = resource::<CalendarEventResource>(api, "/api/document-management/calendar-events");

    let api = api
        .route(
            "/api/document-management/receipts",
            get(receipts::list).post(receipts::create),
        )
        .route(
            "/api/document-management/receipts/:id",
            get(receipts::retrieve)
                .put(receipts::replace)
                .delete(receipts::destroy),
        )
        .route(
            "/api/document-management/files",
            get(files::list).post(files::upload.layer(DefaultBodyLimit::max(upload_limit))),
        )
        .route(
            "/api/document-management/files/:id",
            get(files::retrieve).delete(files::destroy),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    api.with_state(state)
}

/// Creates the health check router
pub fn create_health_router() -> Router { Router::new().route("/health", get(|| async { "OK" })) }

/// Creates the main application router
///
/// Health check and API routes, all behind the request id middleware.
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .merge(create_health_router())
        .merge(create_router(state))
        .layer(middleware::from_fn(request_id_middleware))
}
