//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};
use strum_macros::EnumIter;

use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Country search strategy.
///
/// - `Exact`: full-text name lookup with an alpha-code fallback; region list
///   sorted by name.
/// - `Fuzzy`: substring lookup ranked client-side; region list in API order,
///   capped at eight cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, EnumIter)]
pub enum SearchMode {
    /// Full-text name lookup, alpha-code fallback
    Exact,
    /// Substring lookup with client-side scoring
    Fuzzy,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Exact => f.write_str("exact"),
            SearchMode::Fuzzy => f.write_str("fuzzy"),
        }
    }
}

/// Application configuration.
///
/// Parsed from the command line (and `COUNTRY_LOOKUP_*` environment variables),
/// or constructed programmatically:
///
/// ```no_run
/// use country_lookup::{Config, SearchMode};
///
/// let config = Config {
///     query: Some("France".to_string()),
///     mode: SearchMode::Exact,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "country_lookup",
    about = "Looks up countries by name or code and lists their regional neighbours."
)]
pub struct Config {
    /// Country to look up. Starts an interactive session when omitted.
    pub query: Option<String>,

    /// Search strategy: exact|fuzzy
    #[arg(long, value_enum, env = "COUNTRY_LOOKUP_MODE", default_value_t = SearchMode::Exact)]
    pub mode: SearchMode,

    /// REST Countries base URL
    #[arg(long, env = "COUNTRY_LOOKUP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: None,
            mode: SearchMode::Exact,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.query.is_none());
        assert_eq!(config.mode, SearchMode::Exact);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert!(config.user_agent.starts_with("country_lookup/"));
    }

    #[test]
    fn test_search_mode_display() {
        assert_eq!(SearchMode::Exact.to_string(), "exact");
        assert_eq!(SearchMode::Fuzzy.to_string(), "fuzzy");
    }
}
