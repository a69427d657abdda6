//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The data-file path is configuration, not core behavior - the
//! persistence crate takes whatever path it is handed.

use serde::{Deserialize, Serialize};
use std::env;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use stockroom_core::MAX_PRODUCTS;

/// Default location of the catalog snapshot, relative to the working
/// directory.
pub const DEFAULT_DATA_PATH: &str = "data/products.dat";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Path of the catalog snapshot file.
    pub data_path: PathBuf,

    /// Truncation limit applied to listings and reports.
    pub list_limit: usize,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// - `STOCKROOM_DATA_PATH` - snapshot location (default
    ///   `data/products.dat`)
    /// - `STOCKROOM_LIST_LIMIT` - listing truncation (default 500)
    pub fn load() -> Result<Self, ConfigError> {
        let data_path = env::var("STOCKROOM_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH));

        let list_limit = match env::var("STOCKROOM_LIST_LIMIT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOCKROOM_LIST_LIMIT".to_string()))?,
            Err(_) => MAX_PRODUCTS,
        };

        Ok(CliConfig {
            data_path,
            list_limit,
        })
    }

    /// Creates the snapshot's parent directory when it does not exist yet,
    /// so the first save does not fail on a missing `data/` directory.
    pub fn ensure_data_dir(&self) -> io::Result<()> {
        if let Some(parent) = self.data_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
