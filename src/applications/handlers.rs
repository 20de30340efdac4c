use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::error::{parse_id, ApiError, ApiResult};
use crate::state::AppState;
use crate::store::Application;
use crate::validation::summarize;

use super::dto::{CreateApplicationRequest, UpdateStatusRequest};

#[instrument(skip(state, payload))]
pub async fn create_application(
    State(state): State<AppState>,
    Json(payload): Json<CreateApplicationRequest>,
) -> ApiResult<(StatusCode, Json<Application>)> {
    let data = payload
        .validate(OffsetDateTime::now_utc())
        .map_err(|violations| {
            warn!(violations = violations.len(), "application payload rejected");
            ApiError::Validation(summarize(&violations))
        })?;

    let application = state.store.create_application(data);
    info!(
        application_id = application.id,
        job_id = application.job_id,
        "application created"
    );
    Ok((StatusCode::CREATED, Json(application)))
}

#[instrument(skip(state))]
pub async fn list_job_applications(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Application>>> {
    let job_id = parse_id(&id)?;
    Ok(Json(state.store.get_applications_by_job(job_id)))
}

#[instrument(skip(state))]
pub async fn list_user_applications(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Application>>> {
    let user_id = parse_id(&id)?;
    Ok(Json(state.store.get_applications_by_user(user_id)))
}

#[instrument(skip(state, payload))]
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> ApiResult<Json<Application>> {
    let id = parse_id(&id)?;
    let status = payload
        .status
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Status is required"))?;

    let application = state
        .store
        .update_application_status(id, &status)
        .ok_or_else(|| ApiError::not_found("Application not found"))?;

    info!(application_id = id, status = %application.status, "application status updated");
    Ok(Json(application))
}
