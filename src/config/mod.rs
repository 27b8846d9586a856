//! Configuration module for seclist.
//!
//! Everything is loaded once, before any fetch. The API key is the only
//! value read from the environment; the endpoint root and the output path
//! are fixed.

mod source_config;

pub use source_config::{API_KEY_VAR, ConfigError, SourceConfig};

use std::env;
use std::path::PathBuf;

/// Where the snapshot is written, relative to the working directory.
pub const OUTPUT_PATH: &str = "./generated/securities.json";

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceConfig,
    pub output_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            source: SourceConfig::from_vars(lookup)?,
            output_path: PathBuf::from(OUTPUT_PATH),
        })
    }
}
