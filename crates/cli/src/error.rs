//! Top-level error type for the `bistro` binary.
//!
//! Everything the session itself can recover from (bad input, unreadable
//! history, failed saves) is handled in place. What reaches this type ends
//! the process.

use thiserror::Error;

use crate::config::ConfigError;
use crate::menu_file::MenuFileError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The configured menu file could not be used.
    #[error("Menu error: {0}")]
    Menu(#[from] MenuFileError),

    /// Console input or output failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
