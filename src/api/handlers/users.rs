//! Handler for user registration.

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::api::json::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "email": "saul@bettercall.com" }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "id": "50746277-23c6-4d85-a890-564c0044c2fb",
///   "created_at": "2025-01-01T00:00:00Z",
///   "updated_at": "2025-01-01T00:00:00Z",
///   "email": "saul@bettercall.com"
/// }
/// ```
///
/// # Errors
///
/// - 4xx if the payload is malformed or `email` is not a valid address
/// - 409 if the email is already registered
/// - 500 on database errors
pub async fn create_user_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, ApiJson<UserResponse>), AppError> {
    payload.validate()?;

    let user = state.user_service.create_user(payload.email).await?;

    Ok((StatusCode::CREATED, ApiJson(user.into())))
}
