//! Bridge from the `log` crate to a shared `Logger`

use super::context::SharedLogger;
use super::levels::LogLevel;
use log::{Log, Metadata, Record};

/// Wrapper to implement the log crate's Log trait
pub struct LogBridge {
    logger: SharedLogger,
}

impl LogBridge {
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.lock().should_log(map_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        // `Logger::log` applies the gate itself
        self.logger
            .lock()
            .log(map_level(record.level()), record.args());
    }

    fn flush(&self) {
        self.logger.lock().flush();
    }
}

/// Map log levels to our levels
fn map_level(level: log::Level) -> LogLevel {
    match level {
        log::Level::Error => LogLevel::Error,
        log::Level::Warn => LogLevel::Warning,
        log::Level::Info => LogLevel::Info,
        log::Level::Debug => LogLevel::Debug,
        log::Level::Trace => LogLevel::Trace,
    }
}

/// Route everything logged through the `log` macros into `logger`.
///
/// Fails if another `log` backend is already installed.
pub fn init_log_bridge(logger: SharedLogger) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
