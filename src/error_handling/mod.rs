//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization and lookup errors)
//! - Categorization of HTTP statuses and transport errors into lookup errors
//! - Per-session search statistics

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status};
pub use stats::SearchStats;
pub use types::{InitializationError, LookupError, LookupErrorKind};
