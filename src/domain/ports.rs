use crate::domain::errors::SymbolListError;
use crate::domain::symbol::SymbolType;
use async_trait::async_trait;
use serde_json::Value;

/// A feed of raw symbol list records, one list per [`SymbolType`].
#[async_trait]
pub trait SymbolSource: Send + Sync {
    /// Fetches the raw record array for one symbol type.
    ///
    /// Transport and status failures surface as [`SymbolListError::FetchFailed`].
    async fn fetch(&self, symbol_type: SymbolType) -> Result<Vec<Value>, SymbolListError>;
}
