//! Repository trait definitions for the domain layer.
//!
//! These traits are the store collaborator contract: the application layer
//! only talks to the store through them, and identifiers and timestamps are
//! always assigned by the implementation, never by the caller.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User creation and bulk deletion
//! - [`ChirpRepository`] - Chirp creation
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod chirp_repository;
pub mod user_repository;

pub use chirp_repository::ChirpRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use chirp_repository::MockChirpRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
