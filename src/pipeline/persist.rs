use crate::error::VendorError;
use factsheet_render_lopdf::write_atomic;
use std::path::Path;

/// Writes a finished sheet, creating its directory on first use. An existing
/// sheet for the same vendor is replaced.
pub fn persist_document(path: &Path, bytes: &[u8]) -> Result<(), VendorError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| VendorError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    write_atomic(path, bytes)?;
    Ok(())
}
