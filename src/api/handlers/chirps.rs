//! Handlers for chirp validation and creation.

use axum::{extract::State, http::StatusCode};

use crate::api::dto::chirp::{
    ChirpResponse, CreateChirpRequest, ValidateChirpRequest, ValidateChirpResponse,
};
use crate::api::json::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Validates a chirp and returns its masked text without storing it.
///
/// # Endpoint
///
/// `POST /api/validate_chirp`
///
/// # Request Body
///
/// ```json
/// { "body": "This is a kerfuffle opinion" }
/// ```
///
/// # Response
///
/// ```json
/// { "cleaned_body": "This is a **** opinion" }
/// ```
///
/// # Errors
///
/// - 4xx with `{"error": ...}` if the body is not a JSON object with a `body` string
/// - 400 `{"error": "chirp is too long"}` if `body` exceeds 140 characters
pub async fn validate_chirp_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ValidateChirpRequest>,
) -> Result<ApiJson<ValidateChirpResponse>, AppError> {
    let cleaned = state.chirp_service.clean(&payload.body)?;

    Ok(ApiJson(ValidateChirpResponse {
        cleaned_body: cleaned.into_inner(),
    }))
}

/// Validates, masks and stores a chirp.
///
/// # Endpoint
///
/// `POST /api/chirps`
///
/// # Request Body
///
/// ```json
/// { "body": "hello world", "user_id": "0f8c1d7e-..." }
/// ```
///
/// `user_id` is optional.
///
/// # Response
///
/// `201 Created` with the stored chirp:
///
/// ```json
/// {
///   "id": "5b1f...",
///   "created_at": "2025-01-01T00:00:00Z",
///   "updated_at": "2025-01-01T00:00:00Z",
///   "body": "hello world",
///   "user_id": "0f8c1d7e-..."
/// }
/// ```
///
/// # Errors
///
/// - 4xx if the payload is malformed
/// - 400 `chirp is too long` if `body` exceeds 140 characters
/// - 400 if `user_id` does not exist
/// - 500 on database errors
pub async fn create_chirp_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateChirpRequest>,
) -> Result<(StatusCode, ApiJson<ChirpResponse>), AppError> {
    let chirp = state
        .chirp_service
        .create(&payload.body, payload.user_id)
        .await?;

    Ok((StatusCode::CREATED, ApiJson(chirp.into())))
}
