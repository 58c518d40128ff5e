//! User entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user as persisted by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: Uuid, email: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let user = User::new(id, "user@example.com".to_string(), now, now);

        assert_eq!(user.id, id);
        assert_eq!(user.email, "user@example.com");
        assert_eq!(user.created_at, user.updated_at);
    }
}
