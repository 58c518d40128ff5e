//! Visit counting middleware for static assets.

use axum::{extract::Request, extract::State, middleware::Next, response::Response};
use std::sync::Arc;

use crate::domain::visit_counter::VisitCounter;

/// Counts every request passing through, then forwards it unchanged.
///
/// The count is taken before the inner service runs, so requests for
/// missing files are counted too.
///
/// # Example
///
/// ```rust,ignore
/// let counted = middleware::from_fn_with_state(state.visits.clone(), visits::layer)
///     .layer(ServeDir::new("static"));
/// ```
pub async fn layer(State(visits): State<Arc<VisitCounter>>, req: Request, next: Next) -> Response {
    visits.increment();
    next.run(req).await
}
