use axum::{extract::State, Json};
use tracing::instrument;

use crate::error::ApiResult;
use crate::state::AppState;
use crate::store::Category;

#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    Ok(Json(state.store.get_categories()))
}
