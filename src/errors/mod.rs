/// Error types for console and file logging
///
/// None of these escape a logging call: constructors report them on stderr and
/// fall back to console-only output, and line writers drop the line.
use std::io;
use std::path::PathBuf;

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failed to create the log directory
    #[error("Failed to create log directory at {}: {source}", .path.display())]
    CreateDirectory { path: PathBuf, source: io::Error },

    /// Failed to open the log file for appending
    #[error("Failed to open log file: {}: {source}", .path.display())]
    OpenFile { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to render CSV line: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize log line: {0}")]
    Serialization(#[from] serde_json::Error),
}
