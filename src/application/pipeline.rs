//! One complete run: validate, fetch every feed, write the snapshot.

use crate::application::aggregator::SymbolAggregator;
use crate::config::Config;
use crate::domain::ports::SymbolSource;
use crate::infrastructure::fmp_source::FmpSymbolSource;
use crate::infrastructure::json_writer::write_symbols;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Runs against the live Financial Modeling Prep feeds.
///
/// Returns the number of symbols written.
pub async fn run(config: &Config) -> Result<usize> {
    let source = FmpSymbolSource::from_config(&config.source)
        .context("Invalid market-data base URL")?;
    run_with_source(Arc::new(source), &config.output_path).await
}

/// Aggregates from `source` and writes to `output_path`.
///
/// The file is only touched once every feed has been fetched and normalized.
pub async fn run_with_source(source: Arc<dyn SymbolSource>, output_path: &Path) -> Result<usize> {
    info!("Building symbol list snapshot...");
    let symbols = SymbolAggregator::new(source)
        .aggregate()
        .await
        .context("Failed to aggregate symbol lists")?;

    write_symbols(output_path, &symbols).context("Failed to save symbol list")?;
    Ok(symbols.len())
}
