//! CLI error type and result alias.

use contab_core::CoreError;
use contab_engine::{ConfigError, EngineError};
use thiserror::Error;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Margin validation failed.
    #[error("invalid margins: {0}")]
    Margins(#[from] CoreError),

    /// Generation configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Table generation failed.
    #[error("generation failed: {0}")]
    Engine(#[from] EngineError),

    /// A command-line argument could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("configuration file error: {0}")]
    ConfigFile(#[from] toml::de::Error),

    /// CSV output failed.
    #[error("csv output error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output failed.
    #[error("json output error: {0}")]
    Json(#[from] serde_json::Error),
}
