//! # Stockroom CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from environment variables
//! 3. Ensure the data directory exists
//! 4. Load the existing snapshot, if any, and run the menu loop
//!
//! The binary owns the catalog value and passes it into every core
//! operation; there is no global state anywhere in the system.

mod config;
mod input;
mod menu;

use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CliConfig;

fn main() -> ExitCode {
    init_tracing();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = config.ensure_data_dir() {
        eprintln!(
            "Could not create data directory for {}: {err}",
            config.data_path.display()
        );
        return ExitCode::FAILURE;
    }

    info!(data_path = %config.data_path.display(), "stockroom started");

    match menu::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Terminal I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber.
///
/// Default level is INFO; override with `RUST_LOG` (e.g. `RUST_LOG=debug`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
