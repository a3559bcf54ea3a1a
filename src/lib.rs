//! icongen - embed vector icons into a generated C header
//!
//! Reads an ordered list of icon files and writes one header holding each
//! file's bytes as an escaped string literal, each file's short name, and
//! the icon count, so a host program can use the icons without touching
//! the filesystem at runtime.

pub mod check;
pub mod config;
pub mod error;
pub mod escape;
pub mod fs;
pub mod generator;
pub mod models;
pub mod module;
pub mod naming;

// Re-exports for convenience
pub use check::{check, CheckOutcome};
pub use config::{Config, ConfigWarning, Verbosity};
pub use error::{IconGenError, IconGenResult};
pub use escape::{decode_literal, escape_bytes};
pub use generator::{generate, IconGenerator};
pub use models::{GeneratedArtifact, GeneratedHeader, IconEntry, IconSource, Symbols};
pub use module::{ModuleManifest, ND_MODULE};
pub use naming::derive_name;
