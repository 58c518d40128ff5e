//! DTOs for chirp endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Chirp;

/// Request to validate a chirp without storing it.
#[derive(Debug, Deserialize)]
pub struct ValidateChirpRequest {
    pub body: String,
}

/// Masked chirp text returned by the validation endpoint.
#[derive(Debug, Serialize)]
pub struct ValidateChirpResponse {
    pub cleaned_body: String,
}

/// Request to create a chirp.
#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,

    /// Optional author; must reference an existing user.
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// A persisted chirp.
#[derive(Debug, Serialize)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Option<Uuid>,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}
