pub mod fmp_source;
pub mod json_writer;
pub mod mock;

pub use fmp_source::FmpSymbolSource;
pub use json_writer::write_symbols;
pub use mock::MockSymbolSource;
