//! Error handling for the rig CLI.
//!
//! Library failures arrive as [`rig_config::ConfigError`] and are wrapped in
//! [`CliError`]; `main` renders the final error through miette.

use std::path::PathBuf;
use thiserror::Error;

pub use rig_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration discovery, assembly or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to write the resolved configuration
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(config_err) => match config_err.hint() {
            Some(hint) => miette::miette!(help = hint.to_string(), "{}", config_err),
            None => miette::miette!("{}", config_err),
        },
        other => miette::miette!("{}", other),
    }
}
