//! Atomic file writing and content hashing

use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::{IconGenError, IconGenResult};

/// Write content to a file atomically
///
/// The content goes to a temp file in the destination directory which is
/// then renamed over `path`, so readers see either the old file or the new
/// one. The destination directory must already exist.
pub fn write_atomic(path: &Path, content: &[u8]) -> IconGenResult<()> {
    let write_err = |source: std::io::Error| IconGenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Compute SHA-256 hash of content as `sha256:<hex>`
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}
