//! API route configuration.

use crate::api::handlers::{
    create_chirp_handler, create_user_handler, healthz_handler, validate_chirp_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /healthz`         - Readiness probe
/// - `POST /validate_chirp`  - Mask a chirp without storing it
/// - `POST /chirps`          - Create a chirp
/// - `POST /users`           - Register a user
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/validate_chirp", post(validate_chirp_handler))
        .route("/chirps", post(create_chirp_handler))
        .route("/users", post(create_user_handler))
}
