use crate::error::{GenError, Result};
use std::fs;
use std::path::Path;

/// Creates or truncates `path` and writes `bytes` as its whole content.
pub fn write_output<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, bytes).map_err(|source| GenError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
