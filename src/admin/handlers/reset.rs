//! Reset handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "reset.html")]
pub struct ResetTemplate {}

/// Deletes all users, then zeroes the visit counter.
///
/// # Endpoint
///
/// `POST /admin/reset`
///
/// # Errors
///
/// Returns 500 with `{"error": ...}` if the users could not be deleted; the
/// visit count is left unchanged in that case.
pub async fn reset_handler(State(state): State<AppState>) -> Result<ResetTemplate, AppError> {
    state.admin_service.reset().await?;
    Ok(ResetTemplate {})
}
