//! Error types for the treeconf configuration container.
//!
//! The tree read/write path is infallible; errors only arise when a
//! container is constructed with an unusable delimiter or when the
//! logging system is initialized.

use std::path::PathBuf;
use thiserror::Error;

/// Container construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Key delimiter must not be empty")]
    EmptyDelimiter,
}

/// Logging initialization errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log directive: {0}")]
    InvalidDirective(String),

    #[error("Invalid log format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),

    #[error("Invalid log output: {0} (must be 'stdout', 'stderr', or 'file')")]
    InvalidOutput(String),

    #[error("Failed to open log file {path:?}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}
