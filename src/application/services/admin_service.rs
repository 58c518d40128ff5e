//! Administrative operations: visit reporting and full reset.

use std::sync::Arc;

use crate::domain::repositories::UserRepository;
use crate::domain::visit_counter::VisitCounter;
use crate::error::AppError;

/// Service behind the `/admin` endpoints.
///
/// A reset wipes the store and the visit counter together. The store is
/// wiped first and the counter is only cleared once that succeeds, so a
/// failed reset leaves both untouched rather than zeroing the count while
/// the data survives.
pub struct AdminService {
    user_repository: Arc<dyn UserRepository>,
    visits: Arc<VisitCounter>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(user_repository: Arc<dyn UserRepository>, visits: Arc<VisitCounter>) -> Self {
        Self {
            user_repository,
            visits,
        }
    }

    /// Current number of counted static-asset visits.
    pub fn hits(&self) -> u64 {
        self.visits.read()
    }

    /// Deletes all users (and their chirps), then zeroes the visit counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store wipe fails. The counter
    /// keeps its value in that case.
    pub async fn reset(&self) -> Result<(), AppError> {
        let deleted = self.user_repository.delete_all().await.inspect_err(|e| {
            tracing::error!(error = %e, "reset aborted: failed to delete users");
        })?;

        self.visits.reset();

        tracing::info!(deleted_users = deleted, "reset complete");

        Ok(())
    }
}
