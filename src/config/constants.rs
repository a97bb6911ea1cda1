//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including API paths, rendering limits and default network settings.

/// Default REST Countries base URL.
///
/// Can be overridden with `--base-url` or `COUNTRY_LOOKUP_BASE_URL`, which is
/// how the integration tests point the client at a mock server.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";

/// REST Countries API version path segment.
pub const API_VERSION: &str = "v3.1";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("country_lookup/", env!("CARGO_PKG_VERSION"));

/// Queries up to this many characters are retried as ISO alpha codes when the
/// exact name lookup fails.
pub const ALPHA_CODE_MAX_LEN: usize = 3;

/// Maximum number of region cards shown in fuzzy mode.
pub const FUZZY_REGION_CARD_LIMIT: usize = 8;

/// Placeholder rendered for missing optional fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Display format for comment timestamps (`10/19/2026, 03:04:05 PM`).
pub const COMMENT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// Prefix of a rendered comment timestamp label. Sorting splits on `": "`.
pub const COMMENT_TIMESTAMP_PREFIX: &str = "Timestamp";
