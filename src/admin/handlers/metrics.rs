//! Visit count page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::state::AppState;

/// Template for the admin metrics page.
#[derive(Template, WebTemplate)]
#[template(path = "metrics.html")]
pub struct MetricsTemplate {
    pub hits: u64,
}

/// Renders the number of counted static-asset visits.
///
/// # Endpoint
///
/// `GET /admin/metrics`
///
/// # Template
///
/// Uses `templates/metrics.html`.
pub async fn metrics_handler(State(state): State<AppState>) -> MetricsTemplate {
    MetricsTemplate {
        hits: state.admin_service.hits(),
    }
}
