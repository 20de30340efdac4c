//! Job-board HTTP backend.
//!
//! Four entities (users, jobs, applications, categories) held in a
//! process-memory store, exposed through CRUD-style endpoints under
//! `/api`. Data does not survive a restart.

pub mod app;
pub mod applications;
pub mod categories;
pub mod config;
pub mod error;
pub mod jobs;
pub mod state;
pub mod store;
pub mod users;
pub mod validation;

pub use app::build_app;
pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
