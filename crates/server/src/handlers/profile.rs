use auth::Caller;
use axum::{Extension, Json};

use crate::dto::CallerProfile;

/// `GET /api/auth/me`
pub async fn me(Extension(caller): Extension<Caller>) -> Json<CallerProfile> { Json(CallerProfile::from(&caller)) }
