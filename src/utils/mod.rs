//! Utility functions for request content processing.
//!
//! - [`profanity_filter`] - Banned-word masking for chirp text

pub mod profanity_filter;
