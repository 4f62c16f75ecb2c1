/// Logger configuration
///
/// Everything a `Logger` needs at construction. Defaults match the classic
/// behavior: `log/` directory, 1 second interval, a line for every message.
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory log files are created in, relative to the working directory
pub const DEFAULT_LOG_DIR: &str = "log";

/// Window that separates a "fresh" repeat of a message from a "collapsed" one
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Distinct messages tracked before the least recently seen is evicted
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// How repeats of the same message inside the interval reach the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileCadence {
    /// Every accepted message is written; the interval only shapes the counters
    #[default]
    EveryMessage,
    /// Repeats inside the interval are counted but not written
    Throttled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub name: String,
    /// File name inside `log_dir`; `None` means console only
    pub file_name: Option<String>,
    pub log_dir: PathBuf,
    pub debug_enabled: bool,
    pub console_enabled: bool,
    /// Defaults to on unless `NO_COLOR` is set; the terminal is not consulted
    pub color_enabled: bool,
    pub interval: Duration,
    pub cadence: FileCadence,
    /// 0 disables eviction
    pub cache_capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: String::from("Logger"),
            file_name: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            debug_enabled: false,
            console_enabled: true,
            color_enabled: std::env::var_os("NO_COLOR").is_none(),
            interval: DEFAULT_INTERVAL,
            cadence: FileCadence::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl AsRef<Path>) -> Self {
        self.log_dir = log_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console_enabled = enabled;
        self
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cadence(mut self, cadence: FileCadence) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Full path of the configured log file, if any
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file_name.as_ref().map(|name| self.log_dir.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::new("Client");

        assert_eq!(config.name, "Client");
        assert_eq!(config.log_dir, PathBuf::from("log"));
        assert_eq!(config.interval, Duration::from_secs(1));
        assert_eq!(config.cadence, FileCadence::EveryMessage);
        assert!(!config.debug_enabled);
        assert!(config.file_path().is_none());
    }

    #[test]
    fn test_file_path_joins_log_dir() {
        let config = LoggerConfig::new("Client")
            .with_log_dir("/tmp/logs")
            .with_file("app.csv");

        assert_eq!(config.file_path(), Some(PathBuf::from("/tmp/logs/app.csv")));
    }
}
