use crate::domain::errors::SymbolListError;
use crate::domain::ports::SymbolSource;
use crate::domain::symbol::SymbolType;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use tracing::info;

/// In-memory [`SymbolSource`] serving canned responses.
///
/// Types without a canned response return an empty list. Types marked with
/// [`MockSymbolSource::fail_on`] return `FetchFailed`.
#[derive(Default)]
pub struct MockSymbolSource {
    responses: HashMap<SymbolType, Vec<Value>>,
    failures: HashSet<SymbolType>,
    calls: Mutex<Vec<SymbolType>>,
}

impl MockSymbolSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, symbol_type: SymbolType, records: Vec<Value>) -> Self {
        self.responses.insert(symbol_type, records);
        self
    }

    pub fn fail_on(mut self, symbol_type: SymbolType) -> Self {
        self.failures.insert(symbol_type);
        self
    }

    /// Types fetched so far, in call order.
    pub fn calls(&self) -> Vec<SymbolType> {
        match self.calls.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl SymbolSource for MockSymbolSource {
    async fn fetch(&self, symbol_type: SymbolType) -> Result<Vec<Value>, SymbolListError> {
        match self.calls.lock() {
            Ok(mut guard) => guard.push(symbol_type),
            Err(poisoned) => poisoned.into_inner().push(symbol_type),
        }

        if self.failures.contains(&symbol_type) {
            info!("MockSymbolSource: Injected failure for {}", symbol_type);
            return Err(SymbolListError::fetch_failed(
                symbol_type,
                "mock: injected fetch failure",
            ));
        }

        Ok(self.responses.get(&symbol_type).cloned().unwrap_or_default())
    }
}
