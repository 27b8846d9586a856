//! Fixed mapping from symbol type to its list endpoint.

use crate::domain::errors::SymbolListError;
use crate::domain::symbol::SymbolType;
use url::Url;

/// Financial Modeling Prep v3 API root.
pub const DATA_SOURCE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Endpoint per symbol type, resolved once against a base URL.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    stock: Url,
    etf: Url,
    forex: Url,
    crypto: Url,
}

impl SourceRegistry {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(base_url)?;
        // Url::join drops the last path segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            stock: base.join(Self::path_for(SymbolType::Stock))?,
            etf: base.join(Self::path_for(SymbolType::Etf))?,
            forex: base.join(Self::path_for(SymbolType::Forex))?,
            crypto: base.join(Self::path_for(SymbolType::Crypto))?,
        })
    }

    fn path_for(symbol_type: SymbolType) -> &'static str {
        match symbol_type {
            SymbolType::Stock => "stock/list",
            SymbolType::Etf => "etf/list",
            SymbolType::Forex => "symbol/available-forex-currency-pairs",
            SymbolType::Crypto => "symbol/available-cryptocurrencies",
        }
    }

    pub fn url_for(&self, symbol_type: SymbolType) -> &Url {
        match symbol_type {
            SymbolType::Stock => &self.stock,
            SymbolType::Etf => &self.etf,
            SymbolType::Forex => &self.forex,
            SymbolType::Crypto => &self.crypto,
        }
    }

    /// Looks up an endpoint by its string key (`stock`, `etf`, `forex`, `crypto`).
    pub fn resolve(&self, key: &str) -> Result<&Url, SymbolListError> {
        let symbol_type: SymbolType = key.parse()?;
        Ok(self.url_for(symbol_type))
    }
}
