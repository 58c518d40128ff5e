//! Business logic services for the application layer.

pub mod admin_service;
pub mod chirp_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use chirp_service::ChirpService;
pub use user_service::UserService;
