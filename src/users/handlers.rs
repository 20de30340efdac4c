use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};

use crate::error::{parse_id, ApiError, ApiResult};
use crate::state::AppState;
use crate::store::User;
use crate::validation::summarize;

use super::dto::CreateUserRequest;

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let data = payload.validate().map_err(|violations| {
        warn!(violations = violations.len(), "user payload rejected");
        ApiError::Validation(summarize(&violations))
    })?;

    let user = state.store.create_user(data).map_err(|e| {
        warn!(username = %e.0, "duplicate username");
        ApiError::bad_request(e.to_string())
    })?;

    info!(user_id = user.id, username = %user.username, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let id = parse_id(&id)?;
    let user = state
        .store
        .get_user(id)
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(user))
}
