//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client
//! - REST Countries source
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use crate::api::RestCountriesClient;
use crate::config::Config;
use crate::error_handling::InitializationError;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the REST Countries source from configuration.
///
/// Builds the HTTP client and validates the base URL.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built
/// and `InitializationError::BaseUrlError` if the base URL is unusable.
pub fn init_source(config: &Config) -> Result<RestCountriesClient, InitializationError> {
    let client = init_client(config)?;
    RestCountriesClient::new(client, &config.base_url)
}
