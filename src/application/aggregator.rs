use crate::domain::errors::SymbolListError;
use crate::domain::normalizer::normalize_all;
use crate::domain::ports::SymbolSource;
use crate::domain::symbol::{CanonicalSymbol, SymbolType};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::info;

/// Fetches every feed in registry order and concatenates the normalized records.
pub struct SymbolAggregator {
    source: Arc<dyn SymbolSource>,
}

impl SymbolAggregator {
    pub fn new(source: Arc<dyn SymbolSource>) -> Self {
        Self { source }
    }

    /// Builds the full snapshot.
    ///
    /// Feeds are fetched one at a time in [`SymbolType::ALL`] order. The first
    /// fetch or normalization error aborts the remaining feeds and nothing is
    /// returned.
    pub async fn aggregate(&self) -> Result<Vec<CanonicalSymbol>, SymbolListError> {
        let symbols = stream::iter(SymbolType::ALL)
            .then(|symbol_type| self.collect_segment(symbol_type))
            .try_fold(Vec::new(), |acc, segment| async move {
                Ok::<_, SymbolListError>(acc.into_iter().chain(segment).collect::<Vec<_>>())
            })
            .await?;

        info!("SymbolAggregator: Aggregated {} symbols", symbols.len());
        Ok(symbols)
    }

    async fn collect_segment(
        &self,
        symbol_type: SymbolType,
    ) -> Result<Vec<CanonicalSymbol>, SymbolListError> {
        let records = self.source.fetch(symbol_type).await?;
        let segment = normalize_all(symbol_type, records)?;
        info!(
            "SymbolAggregator: Normalized {} {} symbols",
            segment.len(),
            symbol_type
        );
        Ok(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock::MockSymbolSource;
    use serde_json::json;

    fn stock(symbol: &str) -> serde_json::Value {
        json!({
            "symbol": symbol,
            "name": symbol,
            "exchange": "NYSE",
            "exchangeShortName": "NYSE",
            "type": "stock"
        })
    }

    fn pair(symbol: &str, short_name: &str) -> serde_json::Value {
        json!({
            "symbol": symbol,
            "name": symbol,
            "currency": "USD",
            "stockExchange": "CCC",
            "exchangeShortName": short_name
        })
    }

    #[test]
    fn test_empty_feeds_yield_empty_snapshot() {
        let source = Arc::new(MockSymbolSource::new());
        let aggregator = SymbolAggregator::new(source.clone());

        let symbols = tokio_test::block_on(aggregator.aggregate()).unwrap();

        assert!(symbols.is_empty());
        assert_eq!(source.calls(), SymbolType::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_segments_follow_registry_order() {
        let source = MockSymbolSource::new()
            .with_response(SymbolType::Crypto, vec![pair("BTCUSD", "CRYPTO")])
            .with_response(SymbolType::Stock, vec![stock("IBM"), stock("GE")])
            .with_response(SymbolType::Forex, vec![pair("EURUSD", "FOREX")]);
        let aggregator = SymbolAggregator::new(Arc::new(source));

        let symbols = aggregator.aggregate().await.unwrap();

        let tickers: Vec<_> = symbols.iter().filter_map(|s| s.symbol.as_deref()).collect();
        assert_eq!(tickers, vec!["IBM", "GE", "EURUSD", "BTCUSD"]);
    }

    #[tokio::test]
    async fn test_null_pass_through_fields_do_not_abort() {
        let sparse = json!({
            "symbol": "ZZZ",
            "name": null,
            "exchange": "NYSE",
            "exchangeShortName": null,
            "type": "stock"
        });
        let source = MockSymbolSource::new()
            .with_response(SymbolType::Stock, vec![stock("IBM"), sparse]);
        let aggregator = SymbolAggregator::new(Arc::new(source));

        let symbols = aggregator.aggregate().await.unwrap();

        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[1].symbol.as_deref(), Some("ZZZ"));
        assert_eq!(symbols[1].name, None);
        assert_eq!(symbols[1].exchange_short_name, None);
    }

    #[tokio::test]
    async fn test_fetch_failure_stops_remaining_feeds() {
        let source = Arc::new(
            MockSymbolSource::new()
                .with_response(SymbolType::Stock, vec![stock("IBM")])
                .fail_on(SymbolType::Etf),
        );
        let aggregator = SymbolAggregator::new(source.clone());

        let err = aggregator.aggregate().await.unwrap_err();

        assert!(matches!(
            err,
            SymbolListError::FetchFailed {
                symbol_type: SymbolType::Etf,
                ..
            }
        ));
        assert_eq!(source.calls(), vec![SymbolType::Stock, SymbolType::Etf]);
    }

    #[tokio::test]
    async fn test_malformed_record_stops_remaining_feeds() {
        let bad_etf = json!({
            "symbol": "GARD",
            "name": "Reality Shares Divcon Dividend Guard ETF",
            "exchange": "BATS",
            "exchangeShortName": "ETF"
        });
        let source =
            Arc::new(MockSymbolSource::new().with_response(SymbolType::Etf, vec![bad_etf]));
        let aggregator = SymbolAggregator::new(source.clone());

        let err = aggregator.aggregate().await.unwrap_err();

        assert!(matches!(err, SymbolListError::MalformedRecord { .. }));
        assert_eq!(source.calls(), vec![SymbolType::Stock, SymbolType::Etf]);
    }
}
