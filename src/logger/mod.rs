//! Leveled console and file logging
//!
//! This module provides a small logging API with:
//! - Six levels (Trace/Debug/Info/Warning/Error/Fatal) plus a debug-mode override
//! - Dual output: colored console + file persistence
//! - File formats picked by extension: `.csv`, `.json`, anything else is plain text
//! - Per-message counters with a one second interval for repeated messages
//!
//! ## Usage
//!
//! ```no_run
//! use umbra_log::logger::{LogContext, Logger};
//!
//! // A single logger
//! let mut logger = Logger::with_file("Worker", "worker.csv", false);
//! logger.info("Worker started");
//! logger.warning(format_args!("Queue depth {}", 128));
//! logger.debug("Hidden unless debug mode is on");
//!
//! // Or a core/client pair passed around explicitly
//! let ctx = LogContext::init_with_file("app.log", true);
//! umbra_log::log_info!(ctx, "Client ready in {} ms", 12);
//! umbra_log::log_core_error!(ctx, "Renderer lost: {}", "device removed");
//! ctx.teardown();
//! ```

mod bridge;
mod cache;
mod clock;
mod config;
mod context;
mod core;
mod entry;
mod file;
mod format;
mod levels;

// Re-export public types
pub use bridge::{init_log_bridge, LogBridge};
pub use cache::{CacheMetrics, MessageCache};
pub use clock::ClockSync;
pub use config::{
    FileCadence, LoggerConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_INTERVAL, DEFAULT_LOG_DIR,
};
pub use context::{LogContext, SharedLogger, CLIENT_LOGGER_NAME, CORE_LOGGER_NAME};
pub use self::core::Logger;
pub use entry::LogEntry;
pub use file::LogFile;
pub use format::{csv_line, json_line, plain_text_line, LogFormat};
pub use levels::LogLevel;

use std::fmt::Display;

impl Logger {
    /// Log at TRACE level (very detailed tracing)
    ///
    /// Only shown when debug mode is on.
    pub fn trace(&mut self, message: impl Display) {
        self.log(LogLevel::Trace, message);
    }

    /// Log at DEBUG level (detailed diagnostics)
    ///
    /// Only shown when debug mode is on.
    ///
    /// # Example
    /// ```no_run
    /// # let mut logger = umbra_log::logger::Logger::new("Client", true);
    /// logger.debug(format_args!("Request headers: {:?}", ["accept"]));
    /// ```
    pub fn debug(&mut self, message: impl Display) {
        self.log(LogLevel::Debug, message);
    }

    /// Log at INFO level (standard operations)
    pub fn info(&mut self, message: impl Display) {
        self.log(LogLevel::Info, message);
    }

    /// Log at WARNING level (issues that need attention)
    pub fn warning(&mut self, message: impl Display) {
        self.log(LogLevel::Warning, message);
    }

    /// Log at ERROR level (failures)
    pub fn error(&mut self, message: impl Display) {
        self.log(LogLevel::Error, message);
    }

    /// Log at FATAL level (unrecoverable failures)
    ///
    /// Only records the message; terminating the process is up to the caller.
    pub fn fatal(&mut self, message: impl Display) {
        self.log(LogLevel::Fatal, message);
    }
}
