//! Repository trait for chirp data access.

use crate::domain::entities::{Chirp, NewChirp};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing chirps.
///
/// Accepts only already-cleaned text (see [`NewChirp`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgChirpRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Creates a new chirp with a store-assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadShape`] if `user_id` does not reference an existing user.
    /// Returns [`AppError::Persistence`] on database errors.
    async fn create(&self, new_chirp: NewChirp) -> Result<Chirp, AppError>;

    /// Counts stored chirps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
