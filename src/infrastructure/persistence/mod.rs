//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage
//! - [`PgChirpRepository`] - Chirp storage

pub mod pg_chirp_repository;
pub mod pg_user_repository;

pub use pg_chirp_repository::PgChirpRepository;
pub use pg_user_repository::PgUserRepository;
