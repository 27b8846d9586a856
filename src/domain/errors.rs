use crate::domain::symbol::SymbolType;
use std::path::PathBuf;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while building a symbol list snapshot.
///
/// None of these are recovered locally: the first one aborts the run.
#[derive(Debug, Error)]
pub enum SymbolListError {
    #[error("Unknown symbol type: {key}")]
    UnknownSourceType { key: String },

    #[error("Failed to fetch {symbol_type} symbols: {source}")]
    FetchFailed {
        symbol_type: SymbolType,
        #[source]
        source: BoxError,
    },

    #[error("Malformed {symbol_type} record: {reason}")]
    MalformedRecord {
        symbol_type: SymbolType,
        reason: String,
    },

    #[error("Failed to write symbol list to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SymbolListError {
    pub fn fetch_failed(symbol_type: SymbolType, source: impl Into<BoxError>) -> Self {
        SymbolListError::FetchFailed {
            symbol_type,
            source: source.into(),
        }
    }

    pub fn malformed(symbol_type: SymbolType, reason: impl Into<String>) -> Self {
        SymbolListError::MalformedRecord {
            symbol_type,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_formatting() {
        let err = SymbolListError::fetch_failed(SymbolType::Forex, "HTTP 503");

        let msg = err.to_string();
        assert!(msg.contains("forex"));
        assert!(msg.contains("HTTP 503"));
    }

    #[test]
    fn test_malformed_record_formatting() {
        let err = SymbolListError::malformed(SymbolType::Etf, "record 3: missing field `type`");

        let msg = err.to_string();
        assert!(msg.contains("etf"));
        assert!(msg.contains("record 3"));
    }
}
