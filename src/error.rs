//! Error types for icongen
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icongen operations
pub type IconGenResult<T> = Result<T, IconGenError>;

/// Main error type for icongen operations
#[derive(Error, Debug)]
pub enum IconGenError {
    /// An icon source could not be opened or read
    #[error("failed to read icon source {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generated header could not be created, written or moved into place
    #[error("failed to write generated header {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file does not parse or holds an invalid value
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IconGenError {
    /// Path the error refers to, when there is one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            IconGenError::Read { path, .. } | IconGenError::Write { path, .. } => Some(path),
            IconGenError::InvalidConfig { file, .. } => Some(file),
            IconGenError::Io(_) => None,
        }
    }
}
