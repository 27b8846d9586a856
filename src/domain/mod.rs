pub mod errors;
pub mod normalizer;
pub mod ports;
pub mod registry;
pub mod symbol;

pub use errors::SymbolListError;
pub use symbol::{CanonicalSymbol, SymbolType};
