//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Records owned by the store ([`User`],
//! [`Chirp`]) carry identifiers and timestamps assigned at write time; the
//! `New*` structs are the inputs used to create them.
//!
//! # Entity Types
//!
//! - [`User`] - A registered user
//! - [`Chirp`] - A persisted short message
//! - [`ChirpBody`] - Submitted chirp text that passed the length check
//! - [`CleanedChirp`] - Chirp text after profanity masking

pub mod chirp;
pub mod user;

pub use chirp::{Chirp, ChirpBody, ChirpError, CleanedChirp, MAX_CHIRP_LENGTH, NewChirp};
pub use user::{NewUser, User};
