//! Icon name derivation

use std::path::Path;

/// Number of trailing characters trimmed from a file name (`.svg`).
pub const SUFFIX_LEN: usize = 4;

/// Derive the short icon name from a source path.
///
/// Takes the file-name component and removes exactly its last
/// [`SUFFIX_LEN`] characters. This is not extension-aware: `abcd.svg`
/// gives `abcd`, `ab.png` gives `ab`, and names of four characters or
/// fewer give an empty string.
pub fn derive_name(path: &Path) -> String {
    let file_name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };
    let keep = file_name.chars().count().saturating_sub(SUFFIX_LEN);
    file_name.chars().take(keep).collect()
}
