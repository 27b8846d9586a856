use crate::domain::errors::SymbolListError;
use crate::domain::symbol::CanonicalSymbol;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes a snapshot as one compact JSON array, replacing any previous file.
///
/// The file is truncated then written in place, so a crash mid-write can
/// leave it empty or partial.
pub fn write_symbols(path: &Path, symbols: &[CanonicalSymbol]) -> Result<(), SymbolListError> {
    let write_err = |source: std::io::Error| SymbolListError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_vec(symbols).map_err(|e| write_err(e.into()))?;
    fs::write(path, content).map_err(write_err)?;

    info!("Wrote {} symbols to {:?}", symbols.len(), path);
    Ok(())
}
