//! Converts raw list records into [`CanonicalSymbol`]s.
//!
//! Dispatch is on the feed the record came from, never on the record's own
//! shape: the feeds reuse field names with different meanings
//! (`exchange` vs `stockExchange`, `type` vs `exchangeShortName`).
//!
//! Feed rules:
//! - `stock`: missing `exchange` becomes `"stock"`, missing `type` becomes `"stock"`.
//! - `etf`: no defaults; a record without `type` is malformed.
//! - `forex` / `crypto`: `exchange` is taken from `stockExchange` and `type` is
//!   the lower-cased `exchangeShortName`, so a record without
//!   `exchangeShortName` is malformed.
//!
//! Every other field is passed through as-is, missing values included.
//! JSON `null` is treated the same as a missing field.

use crate::domain::errors::SymbolListError;
use crate::domain::symbol::{CanonicalSymbol, SymbolType};
use serde::Deserialize;
use serde_json::Value;

const STOCK_DEFAULT: &str = "stock";

/// Record shape of the stock and ETF list feeds. `price` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListedRecord {
    symbol: Option<String>,
    name: Option<String>,
    exchange: Option<String>,
    exchange_short_name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Record shape of the forex and crypto pair feeds. `currency` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyPairRecord {
    symbol: Option<String>,
    name: Option<String>,
    stock_exchange: Option<String>,
    exchange_short_name: Option<String>,
}

pub fn normalize(symbol_type: SymbolType, raw: Value) -> Result<CanonicalSymbol, SymbolListError> {
    match symbol_type {
        SymbolType::Stock => Ok(normalize_stock(parse(symbol_type, raw)?)),
        SymbolType::Etf => normalize_etf(parse(symbol_type, raw)?),
        SymbolType::Forex | SymbolType::Crypto => {
            normalize_currency_pair(symbol_type, parse(symbol_type, raw)?)
        }
    }
}

/// Normalizes a whole feed response, preserving its order.
///
/// Fails on the first malformed record; the error names its position.
pub fn normalize_all(
    symbol_type: SymbolType,
    records: Vec<Value>,
) -> Result<Vec<CanonicalSymbol>, SymbolListError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            normalize(symbol_type, raw).map_err(|e| match e {
                SymbolListError::MalformedRecord {
                    symbol_type,
                    reason,
                } => SymbolListError::malformed(symbol_type, format!("record {index}: {reason}")),
                other => other,
            })
        })
        .collect()
}

fn parse<T>(symbol_type: SymbolType, raw: Value) -> Result<T, SymbolListError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_value(raw).map_err(|e| SymbolListError::malformed(symbol_type, e.to_string()))
}

fn required(
    symbol_type: SymbolType,
    field: &'static str,
    value: Option<String>,
) -> Result<String, SymbolListError> {
    value.ok_or_else(|| {
        SymbolListError::malformed(symbol_type, format!("missing field `{field}`"))
    })
}

fn normalize_stock(record: ListedRecord) -> CanonicalSymbol {
    CanonicalSymbol {
        symbol: record.symbol,
        name: record.name,
        exchange: Some(record.exchange.unwrap_or_else(|| STOCK_DEFAULT.to_string())),
        exchange_short_name: record.exchange_short_name,
        kind: record
            .kind
            .map(|kind| kind.to_lowercase())
            .unwrap_or_else(|| STOCK_DEFAULT.to_string()),
    }
}

fn normalize_etf(record: ListedRecord) -> Result<CanonicalSymbol, SymbolListError> {
    Ok(CanonicalSymbol {
        kind: required(SymbolType::Etf, "type", record.kind)?.to_lowercase(),
        symbol: record.symbol,
        name: record.name,
        exchange: record.exchange,
        exchange_short_name: record.exchange_short_name,
    })
}

fn normalize_currency_pair(
    symbol_type: SymbolType,
    record: CurrencyPairRecord,
) -> Result<CanonicalSymbol, SymbolListError> {
    let exchange_short_name =
        required(symbol_type, "exchangeShortName", record.exchange_short_name)?;
    Ok(CanonicalSymbol {
        symbol: record.symbol,
        name: record.name,
        exchange: record.stock_exchange,
        kind: exchange_short_name.to_lowercase(),
        exchange_short_name: Some(exchange_short_name),
    })
}
