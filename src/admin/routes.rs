//! Admin route configuration.

use crate::admin::handlers::{metrics_handler, reset_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Admin routes, mounted under `/admin`.
///
/// # Endpoints
///
/// - `GET  /metrics` - Visit count page
/// - `POST /reset`   - Delete all users and zero the visit count
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/reset", post(reset_handler))
}
