//! Admin page handlers.

pub mod metrics;
pub mod reset;

pub use metrics::metrics_handler;
pub use reset::reset_handler;
