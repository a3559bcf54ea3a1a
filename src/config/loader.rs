//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconGenError, IconGenResult};

use super::types::{Config, Verbosity};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "icongen.toml";

/// Environment variable overriding `generator.symbol_prefix`.
pub const ENV_SYMBOL_PREFIX: &str = "ICONGEN_SYMBOL_PREFIX";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> IconGenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| IconGenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `icongen.toml` under `root` if present, otherwise defaults.
///
/// Environment overrides are applied in both cases.
pub fn load_or_default(root: Option<&Path>) -> IconGenResult<(Config, Vec<ConfigWarning>)> {
    let root = root.unwrap_or_else(|| Path::new("."));
    let path = root.join(CONFIG_FILE_NAME);

    if path.is_file() {
        let (config, warnings) = load_with_warnings(&path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (ICONGEN_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // ICONGEN_OUTPUT
    if let Ok(output) = std::env::var("ICONGEN_OUTPUT") {
        if !output.is_empty() {
            config.generator.output = PathBuf::from(output);
        }
    }

    // ICONGEN_SYMBOL_PREFIX
    if let Some(prefix) = env_symbol_prefix() {
        config.generator.symbol_prefix = prefix;
    }

    // ICONGEN_VERBOSITY
    if let Ok(verbosity) = std::env::var("ICONGEN_VERBOSITY") {
        config.output.verbosity = parse_verbosity(&verbosity);
    }

    config
}

/// Non-empty value of `ICONGEN_SYMBOL_PREFIX`, if set.
pub fn env_symbol_prefix() -> Option<String> {
    std::env::var(ENV_SYMBOL_PREFIX)
        .ok()
        .filter(|prefix| !prefix.is_empty())
}

fn parse_verbosity(value: &str) -> Verbosity {
    match value.to_lowercase().as_str() {
        "quiet" => Verbosity::Quiet,
        "verbose" => Verbosity::Verbose,
        "debug" => Verbosity::Debug,
        _ => Verbosity::Normal,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "generator",
        "output",
        "sources",
        "icons_dir",
        "extension",
        "symbol_prefix",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
