//! Market-data source configuration parsing from environment variables.

use crate::domain::registry::DATA_SOURCE_URL;
use std::fmt;
use thiserror::Error;

/// Environment variable holding the Financial Modeling Prep API key.
pub const API_KEY_VAR: &str = "NODE_FMP_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unable to obtain API key from env. Ensure .env contains an entry for NODE_FMP_KEY")]
    MissingApiKey,
}

/// Financial Modeling Prep API configuration
#[derive(Clone)]
pub struct SourceConfig {
    pub api_key: String,
    pub base_url: String,
}

impl SourceConfig {
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            base_url: DATA_SOURCE_URL.to_string(),
        })
    }
}

// Keeps the key out of logs
impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
