//! CLI-specific error types

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors; all of them abort the process with a non-zero exit.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Runtime or socket error
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
