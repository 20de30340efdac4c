mod dto;
pub mod handlers;

use crate::state::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/applications", post(handlers::create_application))
        .route(
            "/applications/:id/status",
            patch(handlers::update_application_status),
        )
        .route("/jobs/:id/applications", get(handlers::list_job_applications))
        .route(
            "/users/:id/applications",
            get(handlers::list_user_applications),
        )
}
