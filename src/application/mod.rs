pub mod aggregator;
pub mod pipeline;

pub use aggregator::SymbolAggregator;
