//! HTTP middleware for request processing.
//!
//! Provides visit counting and observability middleware.

pub mod tracing;
pub mod visits;
