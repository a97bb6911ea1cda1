//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `country_lookup` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use country_lookup::initialization::init_logger_with;
use country_lookup::{run, Config, SearchOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // .env may set COUNTRY_LOOKUP_BASE_URL / COUNTRY_LOOKUP_MODE; absence is fine
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let one_shot = config.query.is_some();
    match run(config).await {
        Ok(report) => {
            if one_shot && matches!(report.last_outcome, Some(SearchOutcome::Failed(_))) {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("country_lookup error: {:#}", e);
            process::exit(1);
        }
    }
}
