//! Financial Modeling Prep symbol list feeds over HTTP.

use crate::config::SourceConfig;
use crate::domain::errors::SymbolListError;
use crate::domain::ports::SymbolSource;
use crate::domain::registry::SourceRegistry;
use crate::domain::symbol::SymbolType;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

pub struct FmpSymbolSource {
    client: Client,
    registry: SourceRegistry,
    api_key: String,
}

impl FmpSymbolSource {
    pub fn new(registry: SourceRegistry, api_key: String) -> Self {
        Self {
            client: Client::new(),
            registry,
            api_key,
        }
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, url::ParseError> {
        let registry = SourceRegistry::new(&config.base_url)?;
        Ok(Self::new(registry, config.api_key.clone()))
    }

    /// Fetches a feed by its string key. Unknown keys fail before any request.
    pub async fn fetch_by_key(&self, key: &str) -> Result<Vec<Value>, SymbolListError> {
        let symbol_type: SymbolType = key.parse()?;
        self.fetch(symbol_type).await
    }
}

#[async_trait]
impl SymbolSource for FmpSymbolSource {
    async fn fetch(&self, symbol_type: SymbolType) -> Result<Vec<Value>, SymbolListError> {
        let url = self.registry.url_for(symbol_type);
        debug!("FmpSymbolSource: GET {} (apikey=<redacted>)", url);

        let response = self
            .client
            .get(url.clone())
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| SymbolListError::fetch_failed(symbol_type, e.without_url()))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| SymbolListError::fetch_failed(symbol_type, e.without_url()))?;

        // FMP answers bad keys with 200 and an {"Error Message": ...} object
        let records = match body {
            Value::Array(records) => records,
            other => {
                return Err(SymbolListError::fetch_failed(
                    symbol_type,
                    format!("expected a JSON array, got: {}", truncate(&other.to_string(), 200)),
                ));
            }
        };

        info!(
            "FmpSymbolSource: Received {} {} records",
            records.len(),
            symbol_type
        );
        Ok(records)
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
