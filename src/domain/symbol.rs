use crate::domain::errors::SymbolListError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instrument category. Each variant has its own source feed and raw record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolType {
    Stock,
    Etf,
    Forex,
    Crypto,
}

impl SymbolType {
    /// Fetch and output order.
    pub const ALL: [SymbolType; 4] = [
        SymbolType::Stock,
        SymbolType::Etf,
        SymbolType::Forex,
        SymbolType::Crypto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolType::Stock => "stock",
            SymbolType::Etf => "etf",
            SymbolType::Forex => "forex",
            SymbolType::Crypto => "crypto",
        }
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolType {
    type Err = SymbolListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stock" => Ok(SymbolType::Stock),
            "etf" => Ok(SymbolType::Etf),
            "forex" => Ok(SymbolType::Forex),
            "crypto" => Ok(SymbolType::Crypto),
            _ => Err(SymbolListError::UnknownSourceType {
                key: s.to_string(),
            }),
        }
    }
}

/// Unified record every source feed is normalized into.
///
/// Serializes with the feed's camelCase field names so the output file keeps
/// the same shape consumers already read. Fields the feed left out stay
/// `None` and are written as `null`; only `type` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalSymbol {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub exchange: Option<String>,
    #[serde(rename = "exchangeShortName")]
    pub exchange_short_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}
