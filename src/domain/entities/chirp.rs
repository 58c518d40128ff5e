//! Chirp entity and the text types a chirp passes through before storage.
//!
//! Submitted text moves through three stages:
//!
//! 1. Raw `&str` decoded from the request
//! 2. [`ChirpBody`] - raw text that passed the length check
//! 3. [`CleanedChirp`] - text after banned words were masked
//!
//! Only a [`CleanedChirp`] can become a [`NewChirp`], so unchecked text never
//! reaches the store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum chirp length in characters, measured before sanitization.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Validation failures for submitted chirp text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChirpError {
    #[error("chirp is too long")]
    TooLong { length: usize },
}

/// Submitted chirp text that is at most [`MAX_CHIRP_LENGTH`] characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpBody(String);

impl ChirpBody {
    /// Checks the raw text against the length limit.
    ///
    /// Length is counted in characters, not bytes, so multi-byte text gets
    /// the same 140-character allowance as ASCII.
    ///
    /// # Errors
    ///
    /// Returns [`ChirpError::TooLong`] when the text exceeds the limit.
    /// Oversized text is rejected, never truncated.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ChirpError> {
        let raw = raw.into();
        let length = raw.chars().count();

        if length > MAX_CHIRP_LENGTH {
            return Err(ChirpError::TooLong { length });
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Chirp text with every banned word replaced by a mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedChirp(String);

impl CleanedChirp {
    pub(crate) fn new(body: String) -> Self {
        Self(body)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A chirp as persisted by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Chirp {
    pub id: Uuid,
    pub body: String,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new chirp.
#[derive(Debug, Clone)]
pub struct NewChirp {
    pub body: CleanedChirp,
    pub user_id: Option<Uuid>,
}
