//! Administrative HTML pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Admin route configuration

pub mod handlers;
pub mod routes;
