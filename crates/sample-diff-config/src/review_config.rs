//! Review configuration
//!
//! Loaded from .sample-review.toml; every field is optional.

use std::fmt;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use sample_diff::{DiffOptions, UnknownOption};
use serde::{Deserialize, Serialize};

/// Name of the config file looked up in the current and home directories.
pub const CONFIG_FILE: &str = ".sample-review.toml";

/// How a review is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Interleaved, human-readable review.
    #[default]
    Text,
    /// The full comparison as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnknownOption {
                kind: "format",
                value: s.to_string(),
                expected: "text, json",
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Review configuration loaded from .sample-review.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Alignment and inline diff options
    #[serde(default)]
    pub diff: DiffOptions,

    /// Unchanged rows shown around each change before the rest is collapsed
    #[serde(default = "default_context")]
    pub context: usize,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Sort language codes before reading samples (sample files store
    /// columns in sorted order)
    #[serde(default)]
    pub sort_languages: bool,
}

fn default_context() -> usize {
    1
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            diff: DiffOptions::default(),
            context: default_context(),
            format: OutputFormat::default(),
            sort_languages: false,
        }
    }
}

impl ReviewConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = find_config_in(&config_dirs()) {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded review config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", path.display(), e);
                }
            }
        }

        log::debug!("Using default review config");
        Self::default()
    }

    /// Load config from an explicit path; unlike `load`, failures are errors
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Directories searched for the config file, in priority order.
fn config_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from(".")];
    dirs.extend(env::var_os("HOME").map(PathBuf::from));
    dirs
}

/// First readable config file in `dirs`, with its content.
fn find_config_in(dirs: &[PathBuf]) -> Option<(PathBuf, String)> {
    dirs.iter().map(|dir| dir.join(CONFIG_FILE)).find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Found config file {}", path.display());
        Some((path, content))
    })
}
