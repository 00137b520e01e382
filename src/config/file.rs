//! TOML configuration file support
//!
//! An optional config file supplies defaults that CLI arguments override:
//!
//! ```toml
//! workers = 8
//!
//! [output]
//! json_output = "reports/"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Defaults loaded from a TOML configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default worker count
    pub workers: Option<i64>,

    /// Output defaults
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// `[output]` section of the configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Default JSON report path
    pub json_output: Option<PathBuf>,
}

impl FileConfig {
    /// Load and parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }
}
