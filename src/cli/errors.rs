//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints them and exits non-zero.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file already present; init refuses to overwrite
    #[error("Config file already exists at {0}")]
    AlreadyInitialized(String),

    /// Demo data could not be loaded
    #[error("Seed error: {0}")]
    Seed(String),

    /// The server failed to boot or crashed
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
