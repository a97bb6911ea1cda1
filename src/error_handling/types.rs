//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured API base URL cannot carry path segments.
    #[error("Invalid base URL '{url}': {reason}")]
    BaseUrlError {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors that end a country search.
///
/// Every variant is terminal for the search that produced it; the session
/// turns it into a single user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The trimmed query was empty.
    #[error("empty query")]
    EmptyQuery,

    /// The API answered with a client error or an empty result.
    #[error("country not found")]
    NotFound,

    /// Transport failure, timeout, server error or undecodable body.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl LookupError {
    /// Returns the kind of this error without its payload.
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::EmptyQuery => LookupErrorKind::EmptyQuery,
            LookupError::NotFound => LookupErrorKind::NotFound,
            LookupError::ServiceUnavailable(_) => LookupErrorKind::ServiceUnavailable,
        }
    }
}

/// Payload-free discriminant of [`LookupError`], used for statistics and
/// message tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupErrorKind {
    EmptyQuery,
    NotFound,
    ServiceUnavailable,
}

impl std::fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupErrorKind::EmptyQuery => "Empty query",
            LookupErrorKind::NotFound => "Not found",
            LookupErrorKind::ServiceUnavailable => "Service unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lookup_error_kind_mapping() {
        assert_eq!(LookupError::EmptyQuery.kind(), LookupErrorKind::EmptyQuery);
        assert_eq!(LookupError::NotFound.kind(), LookupErrorKind::NotFound);
        assert_eq!(
            LookupError::ServiceUnavailable("timeout".into()).kind(),
            LookupErrorKind::ServiceUnavailable
        );
    }

    #[test]
    fn test_lookup_error_kind_labels_are_distinct() {
        let labels: Vec<&str> = LookupErrorKind::iter().map(|k| k.as_str()).collect();
        let mut deduped = labels.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }

    #[test]
    fn test_service_unavailable_display_includes_cause() {
        let err = LookupError::ServiceUnavailable("connection refused".into());
        assert_eq!(err.to_string(), "service unavailable: connection refused");
    }
}
