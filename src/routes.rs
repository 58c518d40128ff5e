//! Top-level router configuration combining API, admin and static routes.
//!
//! # Route Structure
//!
//! - `/app/*`                - Static files (counted by the visit counter)
//! - `/app/assets/logo.png`  - Logo, served without counting
//! - `/api/*`                - JSON API
//! - `/admin/*`              - Admin HTML pages
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging on every route
//! - **Visit counting** - Wraps the `/app` file server only

use std::path::Path;

use crate::admin;
use crate::api;
use crate::api::middleware::{tracing as trace, visits};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `fileserver_root` - directory served under `/app`
pub fn app_router(state: AppState, fileserver_root: impl AsRef<Path>) -> Router {
    let root = fileserver_root.as_ref();

    let counted_files = middleware::from_fn_with_state(state.visits.clone(), visits::layer)
        .layer(ServeDir::new(root));

    Router::new()
        .route_service(
            "/app/assets/logo.png",
            ServeFile::new(root.join("assets").join("logo.png")),
        )
        .nest_service("/app", counted_files)
        .nest("/api", api::routes::routes())
        .nest("/admin", admin::routes::routes())
        .with_state(state)
        .layer(trace::layer())
}
