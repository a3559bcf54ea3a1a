//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::IconGenResult;
use crate::models::{is_c_identifier, Symbols, DEFAULT_SYMBOL_PREFIX};
use crate::module::ND_MODULE;

use super::loader::{self, ConfigWarning};

/// Generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Where the header is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Explicit ordered inputs; when empty, `icons_dir` is scanned
    #[serde(default)]
    pub sources: Vec<PathBuf>,

    /// Directory scanned for icons when `sources` is empty
    #[serde(default = "default_icons_dir")]
    pub icons_dir: PathBuf,

    /// Extension of icon files picked up by the scan
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Prefix of the generated C identifiers
    #[serde(default = "default_symbol_prefix")]
    pub symbol_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            sources: Vec::new(),
            icons_dir: default_icons_dir(),
            extension: default_extension(),
            symbol_prefix: default_symbol_prefix(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("editor/icons/editor_nd_icons.gen.h")
}

fn default_icons_dir() -> PathBuf {
    PathBuf::from(ND_MODULE.icons_path)
}

fn default_extension() -> String {
    "svg".to_string()
}

fn default_symbol_prefix() -> String {
    DEFAULT_SYMBOL_PREFIX.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a `-v` count onto a verbosity, never going below `self`
    pub fn raised_by(self, count: u8) -> Self {
        let from_flag = match count {
            0 => return self,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        self.max(from_flag)
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> IconGenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> IconGenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `icongen.toml` under `root`, or defaults
    pub fn load_or_default(root: Option<&Path>) -> IconGenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(root)
    }

    /// Apply environment variable overrides (ICONGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject values that would produce a broken header
    pub fn validate(&self, file: &Path) -> IconGenResult<()> {
        if !is_c_identifier(&self.generator.symbol_prefix) {
            return Err(crate::error::IconGenError::InvalidConfig {
                file: file.to_path_buf(),
                message: format!(
                    "symbol_prefix '{}' is not a C identifier",
                    self.generator.symbol_prefix
                ),
            });
        }
        Ok(())
    }

    /// C identifiers for the configured prefix
    pub fn symbols(&self) -> Symbols {
        Symbols::with_prefix(&self.generator.symbol_prefix)
    }
}
