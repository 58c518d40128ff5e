//! HTTP request/response tracing middleware.

use std::time::Duration;

use axum::extract::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Opens an `INFO` span named `request` with method and path
///
/// **On Response:**
/// - Logs status code and latency in milliseconds at `INFO`
///
/// **On Failure:**
/// - 5xx responses are additionally logged at `ERROR` with the failure class
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/api/chirps}: finished processing request latency=4 ms status=201
/// ERROR request{method=POST path=/admin/reset}: request failed class=Status code: 500 latency=12 ms
/// ```
#[allow(clippy::type_complexity)]
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&Request) -> Span,
    (),
    DefaultOnResponse,
    (),
    (),
    fn(ServerErrorsFailureClass, Duration, &Span),
> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request) -> Span)
        .on_request(())
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_body_chunk(())
        .on_eos(())
        .on_failure(on_failure as fn(ServerErrorsFailureClass, Duration, &Span))
}

fn make_span(req: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
    )
}

fn on_failure(class: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        class = %class,
        latency = format_args!("{} ms", latency.as_millis()),
        "request failed"
    );
}
