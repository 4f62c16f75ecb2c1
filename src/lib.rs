pub mod errors;
pub mod logger;

pub use errors::{LoggerError, Result};
pub use logger::{
    FileCadence, LogContext, LogEntry, LogFormat, LogLevel, Logger, LoggerConfig, SharedLogger,
};
