//! Handler for the readiness endpoint.

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /api/healthz`
///
/// # Response
///
/// `200 OK` with `text/plain` body `OK`. The store is not contacted.
pub async fn healthz_handler() -> &'static str {
    "OK"
}
