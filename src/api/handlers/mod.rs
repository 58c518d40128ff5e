//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod chirps;
pub mod health;
pub mod users;

pub use chirps::{create_chirp_handler, validate_chirp_handler};
pub use health::healthz_handler;
pub use users::create_user_handler;
