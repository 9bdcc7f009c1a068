use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::completeness::ROUTE_BASIC_PROFILE;
use super::domain::{CompletenessTier, ProfileSnapshot, ProfileStatus, UserId};
use super::repository::{ProfileRepository, RepositoryError, VettingQueue};
use super::service::{ProfileServiceError, ProfileStatusService};

/// Router builder exposing HTTP endpoints for snapshot intake and status
/// lookups.
pub fn profile_router<R, Q>(service: Arc<ProfileStatusService<R, Q>>) -> Router
where
    R: ProfileRepository + 'static,
    Q: VettingQueue + 'static,
{
    Router::new()
        .route("/api/v1/profiles", post(upsert_handler::<R, Q>))
        .route(
            "/api/v1/profiles/:user_id/status",
            get(status_handler::<R, Q>),
        )
        .route(
            "/api/v1/profiles/:user_id/refresh",
            post(refresh_handler::<R, Q>),
        )
        .with_state(service)
}

pub(crate) async fn upsert_handler<R, Q>(
    State(service): State<Arc<ProfileStatusService<R, Q>>>,
    axum::Json(snapshot): axum::Json<ProfileSnapshot>,
) -> Response
where
    R: ProfileRepository + 'static,
    Q: VettingQueue + 'static,
{
    match service.upsert(snapshot) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(ProfileServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "profile already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, Q>(
    State(service): State<Arc<ProfileStatusService<R, Q>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    Q: VettingQueue + 'static,
{
    let id = UserId(user_id);
    match service.status(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ProfileServiceError::Repository(RepositoryError::NotFound)) => {
            // Unknown users render as a blank, incomplete profile rather
            // than a hard 404.
            let payload = json!({
                "user_id": id.0,
                "status": ProfileStatus::Incomplete.label(),
                "tier": CompletenessTier::Basic.label(),
                "percent": 0,
                "cta_route": ROUTE_BASIC_PROFILE,
                "next_steps": ["Complete basic profile information"],
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn refresh_handler<R, Q>(
    State(service): State<Arc<ProfileStatusService<R, Q>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    Q: VettingQueue + 'static,
{
    let id = UserId(user_id);
    match service.refresh(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ProfileServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "profile not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
