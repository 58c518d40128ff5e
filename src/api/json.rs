//! JSON extractor and response type with API-shaped errors.
//!
//! `axum::Json` rejects bad input with a plain-text body. [`ApiJson`]
//! converts the rejection into [`AppError::BadShape`] so clients always get
//! `{"error": "..."}`, and turns a serialization failure into
//! [`AppError::Encoding`] instead of panicking.

use axum::{
    extract::FromRequest,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to encode response");
                AppError::encoding(e.to_string()).into_response()
            }
        }
    }
}
