//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::chirp_service::ChirpService`] - Chirp validation, masking and creation
//! - [`services::user_service::UserService`] - User registration
//! - [`services::admin_service::AdminService`] - Visit reporting and reset

pub mod services;
