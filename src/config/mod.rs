//! Configuration module for icongen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ICONGEN_*)
//! 3. Project config (./icongen.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{env_symbol_prefix, ConfigWarning, CONFIG_FILE_NAME, ENV_SYMBOL_PREFIX};
pub use types::{Config, GeneratorConfig, OutputConfig, Verbosity};
