//! country_lookup library: country search against the REST Countries API
//!
//! This library resolves a free-text query to one country (exactly, with an
//! ISO alpha-code fallback, or by fuzzy ranking), renders its details and
//! lists the other countries of its region.
//!
//! # Example
//!
//! ```no_run
//! use country_lookup::{Config, SearchMode, run};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     query: Some("France".to_string()),
//!     mode: SearchMode::Exact,
//!     ..Default::default()
//! };
//!
//! let report = run(config).await?;
//! println!("{} search(es), {} displayed", report.searches, report.displayed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod api;
pub mod app;
pub mod comments;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod matching;
pub mod models;
pub mod pipeline;
pub mod render;

// Re-export public API
pub use app::SessionReport;
pub use config::{Config, LogFormat, LogLevel, SearchMode};
pub use error_handling::LookupError;
pub use models::Country;
pub use pipeline::{SearchOutcome, SearchSession};

use anyhow::{Context, Result};
use tokio::io::BufReader;

use crate::initialization::init_source;
use crate::render::TerminalView;

/// Runs country_lookup with the provided configuration.
///
/// With `config.query` set, performs one search and returns. Otherwise reads
/// queries and commands from stdin until EOF or `:quit`. Results are written
/// to stdout.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be initialized, the base URL is
/// invalid, or stdin/stdout fail. A failed search is not an error; inspect
/// [`SessionReport::last_outcome`].
pub async fn run(config: Config) -> Result<SessionReport> {
    let source = init_source(&config).context("Failed to initialize country source")?;
    let session = SearchSession::new(source, TerminalView::stdout(), config.mode);

    match config.query.as_deref() {
        Some(query) => Ok(app::run_once(&session, query).await),
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            app::run_interactive(session, stdin, &mut stdout).await
        }
    }
}
