//! Core data models for icongen

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Default prefix of the generated C identifiers.
pub const DEFAULT_SYMBOL_PREFIX: &str = "editor_nd_icon";

/// One icon source, constructed per generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    pub path: PathBuf,
    pub name: String,
}

impl IconSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = crate::naming::derive_name(&path);
        Self { path, name }
    }
}

/// A single entry of the generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// File content as `\<hex>` escapes, line-feeds dropped
    pub literal: String,
    /// Derived short name
    pub name: String,
}

/// The assembled header before it is written.
///
/// Entry order is input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub entries: Vec<IconEntry>,
}

impl GeneratedArtifact {
    /// Number of icons, always equal to `entries.len()`
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn literals(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|e| e.literal.as_str())
    }
}

/// A header that has been rendered and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHeader {
    pub artifact: GeneratedArtifact,
    /// Exact text written to the output file
    pub text: String,
}

impl GeneratedHeader {
    /// `sha256:<hex>` of the written text
    pub fn hash(&self) -> String {
        crate::fs::hash_content(self.text.as_bytes())
    }
}

/// C identifiers used in the generated header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbols {
    pub sources: String,
    pub names: String,
    pub count: String,
}

impl Symbols {
    /// `<prefix>_sources`, `<prefix>_names`, `<prefix>_count`
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            sources: format!("{}_sources", prefix),
            names: format!("{}_names", prefix),
            count: format!("{}_count", prefix),
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_SYMBOL_PREFIX)
    }
}

/// Check that `s` is usable as a C identifier.
pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Sorted list of files in `dir` with the given extension.
///
/// Sorting by file name keeps the generated header stable across platforms.
pub fn discover_icons(dir: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        if path.extension().is_some_and(|ext| ext == extension) {
            found.push(path);
        }
    }
    found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(found)
}
