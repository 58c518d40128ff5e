//! User registration service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for registering users.
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Registers a user with the given email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn create_user(&self, email: String) -> Result<User, AppError> {
        let user = self.user_repository.create(NewUser { email }).await?;

        tracing::info!(user_id = %user.id, "user created");

        Ok(user)
    }
}
