use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::entities::ChirpError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request payload could not be decoded or failed shape validation.
    #[error("{message}")]
    BadShape { status: StatusCode, message: String },
    #[error("chirp is too long")]
    TooLong,
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Persistence { message: String },
    /// Response body could not be serialized.
    #[error("{message}")]
    Encoding { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadShape {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadShape { status, .. } => *status,
            AppError::TooLong => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Persistence { .. } | AppError::Encoding { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True for failures caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            // Serializing the error itself could fail the same way, so fall back to plain text.
            AppError::Encoding { message } => {
                (status, format!("error encoding json: {message}")).into_response()
            }
            other => (
                status,
                Json(ErrorBody {
                    error: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadShape {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::bad_request(errors.to_string())
    }
}

impl From<ChirpError> for AppError {
    fn from(e: ChirpError) -> Self {
        match e {
            ChirpError::TooLong { .. } => Self::TooLong,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return match db.constraint() {
                    Some("users_email_key") => AppError::conflict("email is already registered"),
                    _ => AppError::conflict("record already exists"),
                };
            }

            if db.is_foreign_key_violation() {
                return match db.constraint() {
                    Some("chirps_user_id_fkey") => AppError::bad_request("user does not exist"),
                    _ => AppError::bad_request("referenced record does not exist"),
                };
            }
        }

        tracing::error!(error = %e, "database error");
        AppError::persistence("database error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_of(err: AppError) -> (StatusCode, Vec<u8>) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_too_long_response() {
        let (status, body) = body_of(AppError::TooLong).await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "error": "chirp is too long" }));
    }

    #[tokio::test]
    async fn test_persistence_response() {
        let (status, body) = body_of(AppError::persistence("database error")).await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "database error");
    }

    #[tokio::test]
    async fn test_encoding_response_is_plain_text() {
        let (status, body) = body_of(AppError::encoding("boom")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(String::from_utf8(body).unwrap(), "error encoding json: boom");
    }

    #[test]
    fn test_status_classes() {
        assert!(AppError::TooLong.is_client_error());
        assert!(AppError::bad_request("nope").is_client_error());
        assert!(AppError::conflict("dup").is_client_error());
        assert!(!AppError::persistence("db").is_client_error());
        assert!(!AppError::encoding("json").is_client_error());
    }

    #[test]
    fn test_from_chirp_error() {
        let err: AppError = ChirpError::TooLong { length: 200 }.into();
        assert!(matches!(err, AppError::TooLong));
    }

    #[test]
    fn test_from_non_database_sqlx_error() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Persistence { .. }));
    }
}
