//! Optional TOML defaults for CLI commands.
//!
//! A `contab.toml` file next to the invocation (or any path given with
//! `--config`) can pre-set the generation options that are usually
//! stable across runs; explicit command-line flags always win.
//!
//! ```toml
//! [generate]
//! workers = 8
//! seed = 42
//! format = "csv"
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// Defaults loaded from the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliDefaults {
    /// Defaults for the `generate` command.
    pub generate: GenerateDefaults,
}

/// Defaults for the `generate` command.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateDefaults {
    /// Worker count (0 = all logical CPUs).
    pub workers: Option<usize>,
    /// Root seed (0 = system entropy).
    pub seed: Option<u64>,
    /// Output format, `csv` or `json`.
    pub format: Option<String>,
}

impl CliDefaults {
    /// Loads defaults from `path`; a missing file yields the built-in
    /// defaults.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
