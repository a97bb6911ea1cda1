//! Error categorization.
//!
//! This module maps transport errors and HTTP statuses onto [`LookupError`].

use reqwest::StatusCode;

use super::types::LookupError;

/// Categorizes a non-success HTTP status.
///
/// Client errors (4xx) mean the API has no such country; everything else is
/// treated as the service being unavailable.
pub fn categorize_status(status: StatusCode) -> LookupError {
    if status.is_client_error() {
        LookupError::NotFound
    } else {
        LookupError::ServiceUnavailable(format!("HTTP {}", status.as_u16()))
    }
}

/// Categorizes a `reqwest::Error` into a [`LookupError`].
///
/// Errors that carry a status code go through [`categorize_status`]; all
/// other failures (connect, timeout, body, decode) are `ServiceUnavailable`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> LookupError {
    if let Some(status) = error.status() {
        return categorize_status(status);
    }

    let cause = if error.is_timeout() {
        "request timed out"
    } else if error.is_connect() {
        "connection failed"
    } else if error.is_body() {
        "failed to read response body"
    } else if error.is_decode() {
        "failed to decode response body"
    } else if error.is_builder() {
        "invalid request"
    } else {
        "request failed"
    };
    LookupError::ServiceUnavailable(cause.to_string())
}
