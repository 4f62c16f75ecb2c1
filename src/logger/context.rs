/// Core/client logger pair passed around explicitly
///
/// `LogContext` replaces process-wide logger statics: build one at startup,
/// hand clones to whoever logs, and call `teardown` (or just drop it) at exit.
/// Building a new context and assigning it over the old one is a
/// re-initialization; the old loggers close their files once the last clone
/// is gone.
use super::config::LoggerConfig;
use super::core::Logger;
use parking_lot::Mutex;
use std::sync::Arc;

/// Name of the logger used by the library itself
pub const CORE_LOGGER_NAME: &str = "Umbra";

/// Name of the logger used by application code
pub const CLIENT_LOGGER_NAME: &str = "Client";

/// A logger that can be shared across threads; one lock per logger
pub type SharedLogger = Arc<Mutex<Logger>>;

#[derive(Debug, Clone)]
pub struct LogContext {
    core: SharedLogger,
    client: SharedLogger,
}

impl LogContext {
    /// Console-only pair. The core logger always runs in debug mode.
    pub fn init(enable_client_debug: bool) -> Self {
        Self::from_configs(
            LoggerConfig::new(CORE_LOGGER_NAME).with_debug(true),
            LoggerConfig::new(CLIENT_LOGGER_NAME).with_debug(enable_client_debug),
        )
    }

    /// Pair that also appends to `log/<file_name>`, both loggers sharing the file
    pub fn init_with_file(file_name: &str, enable_client_debug: bool) -> Self {
        Self::from_configs(
            LoggerConfig::new(CORE_LOGGER_NAME)
                .with_debug(true)
                .with_file(file_name),
            LoggerConfig::new(CLIENT_LOGGER_NAME)
                .with_debug(enable_client_debug)
                .with_file(file_name),
        )
    }

    pub fn from_configs(core: LoggerConfig, client: LoggerConfig) -> Self {
        Self {
            core: Arc::new(Mutex::new(Logger::from_config(core))),
            client: Arc::new(Mutex::new(Logger::from_config(client))),
        }
    }

    pub fn core(&self) -> &SharedLogger {
        &self.core
    }

    pub fn client(&self) -> &SharedLogger {
        &self.client
    }

    /// Flush both loggers and release this handle on them
    pub fn teardown(self) {
        self.core.lock().flush();
        self.client.lock().flush();
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_with {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.lock().log($level, format_args!($($arg)+))
    };
}

// Client Log Macros

/// Log at TRACE through the context's client logger
#[macro_export]
macro_rules! log_trace {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.client(), $crate::logger::LogLevel::Trace, $($arg)+) };
}

/// Log at DEBUG through the context's client logger
#[macro_export]
macro_rules! log_debug {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.client(), $crate::logger::LogLevel::Debug, $($arg)+) };
}

/// Log at INFO through the context's client logger
#[macro_export]
macro_rules! log_info {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.client(), $crate::logger::LogLevel::Info, $($arg)+) };
}

/// Log at WARNING through the context's client logger
#[macro_export]
macro_rules! log_warning {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.client(), $crate::logger::LogLevel::Warning, $($arg)+) };
}

/// Log at ERROR through the context's client logger
#[macro_export]
macro_rules! log_error {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.client(), $crate::logger::LogLevel::Error, $($arg)+) };
}

/// Log at FATAL through the context's client logger
#[macro_export]
macro_rules! log_fatal {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.client(), $crate::logger::LogLevel::Fatal, $($arg)+) };
}

// Core Log Macros

/// Log at TRACE through the context's core logger
#[macro_export]
macro_rules! log_core_trace {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.core(), $crate::logger::LogLevel::Trace, $($arg)+) };
}

/// Log at DEBUG through the context's core logger
#[macro_export]
macro_rules! log_core_debug {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.core(), $crate::logger::LogLevel::Debug, $($arg)+) };
}

/// Log at INFO through the context's core logger
#[macro_export]
macro_rules! log_core_info {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.core(), $crate::logger::LogLevel::Info, $($arg)+) };
}

/// Log at WARNING through the context's core logger
#[macro_export]
macro_rules! log_core_warning {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.core(), $crate::logger::LogLevel::Warning, $($arg)+) };
}

/// Log at ERROR through the context's core logger
#[macro_export]
macro_rules! log_core_error {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.core(), $crate::logger::LogLevel::Error, $($arg)+) };
}

/// Log at FATAL through the context's core logger
#[macro_export]
macro_rules! log_core_fatal {
    ($ctx:expr, $($arg:tt)+) => { $crate::__log_with!($ctx.core(), $crate::logger::LogLevel::Fatal, $($arg)+) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use tempfile::TempDir;

    fn file_context(temp: &TempDir, file_name: &str, client_debug: bool) -> LogContext {
        LogContext::from_configs(
            LoggerConfig::new(CORE_LOGGER_NAME)
                .with_debug(true)
                .with_log_dir(temp.path())
                .with_file(file_name)
                .with_console(false),
            LoggerConfig::new(CLIENT_LOGGER_NAME)
                .with_debug(client_debug)
                .with_log_dir(temp.path())
                .with_file(file_name)
                .with_console(false),
        )
    }

    fn read_lines(temp: &TempDir, file_name: &str) -> Vec<String> {
        fs::read_to_string(temp.path().join(file_name))
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_init_names_and_debug_policy() {
        let ctx = LogContext::init(false);

        assert_eq!(ctx.core().lock().name(), "Umbra");
        assert!(ctx.core().lock().is_debug_enabled());
        assert_eq!(ctx.client().lock().name(), "Client");
        assert!(!ctx.client().lock().is_debug_enabled());
        assert!(!ctx.client().lock().is_file_enabled());
    }

    #[test]
    fn test_macros_route_to_the_right_logger() {
        let temp = TempDir::new().unwrap();
        let ctx = file_context(&temp, "app.log", false);

        crate::log_debug!(ctx, "client debug {}", 1);
        crate::log_info!(ctx, "client info {}", 2);
        crate::log_core_debug!(ctx, "core debug {}", 3);
        crate::log_core_fatal!(ctx, "core fatal {}", 4);

        let lines = read_lines(&temp, "app.log");
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("[INFO]: client info 2"));
        assert!(lines[1].ends_with("[DEBUG]: core debug 3"));
        assert!(lines[2].ends_with("[FATAL]: core fatal 4"));

        assert!(ctx.client().lock().cache_entry("client info 2").is_some());
        assert!(ctx.core().lock().cache_entry("client info 2").is_none());
        ctx.teardown();
    }

    #[test]
    fn test_reinit_replaces_loggers() {
        let temp = TempDir::new().unwrap();
        let mut ctx = file_context(&temp, "first.csv", true);
        crate::log_trace!(ctx, "before");

        ctx = file_context(&temp, "second.csv", true);
        crate::log_trace!(ctx, "after");

        assert_eq!(read_lines(&temp, "first.csv").len(), 1);
        assert_eq!(read_lines(&temp, "second.csv").len(), 1);
        assert!(ctx.client().lock().cache_entry("before").is_none());
    }

    #[test]
    fn test_shared_across_threads() {
        let temp = TempDir::new().unwrap();
        let ctx = file_context(&temp, "threads.csv", false);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ctx = ctx.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        crate::log_warning!(ctx, "contended");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(read_lines(&temp, "threads.csv").len(), 100);
        let client = ctx.client().lock();
        assert_eq!(client.cache_entry("contended").unwrap().total_count, 100);
    }
}
