//! Chirp validation and creation service.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Chirp, ChirpBody, CleanedChirp, NewChirp};
use crate::domain::repositories::ChirpRepository;
use crate::error::AppError;
use crate::utils::profanity_filter::{BannedWords, sanitize};

/// Service running submitted chirp text through the length check and the
/// profanity filter, and optionally persisting the result.
pub struct ChirpService {
    chirp_repository: Arc<dyn ChirpRepository>,
    banned_words: &'static BannedWords,
}

impl ChirpService {
    /// Creates a new chirp service using the default banned-word set.
    pub fn new(chirp_repository: Arc<dyn ChirpRepository>) -> Self {
        Self {
            chirp_repository,
            banned_words: BannedWords::global(),
        }
    }

    /// Checks the length of `raw` and masks banned words.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::TooLong`] if `raw` exceeds 140 characters.
    pub fn clean(&self, raw: &str) -> Result<CleanedChirp, AppError> {
        let body = ChirpBody::parse(raw)?;
        Ok(sanitize(&body, self.banned_words))
    }

    /// Cleans `raw` and stores it.
    ///
    /// The store is only called once the text passed validation; a store
    /// failure is returned as-is and never retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::TooLong`] if `raw` exceeds 140 characters.
    /// Returns [`AppError::BadShape`] if `user_id` does not exist.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn create(&self, raw: &str, user_id: Option<Uuid>) -> Result<Chirp, AppError> {
        let body = self.clean(raw)?;

        let chirp = self
            .chirp_repository
            .create(NewChirp { body, user_id })
            .await?;

        tracing::debug!(chirp_id = %chirp.id, "chirp created");

        Ok(chirp)
    }
}
