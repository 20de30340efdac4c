use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::error::{parse_id, ApiError, ApiResult};
use crate::state::AppState;
use crate::store::{Job, JobFilters};
use crate::validation::summarize;

use super::dto::CreateJobRequest;

#[instrument(skip(state))]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(filters): Query<JobFilters>,
) -> ApiResult<Json<Vec<Job>>> {
    let jobs = state.store.get_jobs(&filters);
    Ok(Json(jobs))
}

#[instrument(skip(state))]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Job>> {
    let id = parse_id(&id)?;
    let job = state
        .store
        .get_job(id)
        .ok_or_else(|| ApiError::not_found("Job not found"))?;
    Ok(Json(job))
}

#[instrument(skip(state, payload))]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobRequest>,
) -> ApiResult<(StatusCode, Json<Job>)> {
    let data = payload
        .validate(OffsetDateTime::now_utc())
        .map_err(|violations| {
            warn!(violations = violations.len(), "job payload rejected");
            ApiError::Validation(summarize(&violations))
        })?;

    let job = state.store.create_job(data);
    info!(job_id = job.id, category = %job.category, "job created");
    Ok((StatusCode::CREATED, Json(job)))
}

#[instrument(skip(state))]
pub async fn list_employer_jobs(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Job>>> {
    let employer_id = parse_id(&id)?;
    let jobs = state.store.get_jobs_by_employer(employer_id);
    Ok(Json(jobs))
}
