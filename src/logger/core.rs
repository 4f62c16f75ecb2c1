/// Core logging implementation
///
/// This module contains the central logging logic that:
/// - Checks if a message passes the debug/level gate
/// - Writes the colored console line
/// - Keeps per-message counters and decides when a repeat reaches the file
use super::cache::{CacheMetrics, MessageCache};
use super::clock::ClockSync;
use super::config::{FileCadence, LoggerConfig};
use super::entry::LogEntry;
use super::file::LogFile;
use super::format::{colorize, console_line, print_stdout_safe, LogFormat};
use super::levels::LogLevel;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug)]
pub struct Logger {
    name: String,
    debug_enabled: bool,
    console_enabled: bool,
    color_enabled: bool,
    log_dir: PathBuf,
    file_name: Option<String>,
    log_file: Option<LogFile>,
    interval: Duration,
    cadence: FileCadence,
    cache: MessageCache,
}

impl Logger {
    /// Console-only logger
    pub fn new(name: impl Into<String>, debug_enabled: bool) -> Self {
        Self::from_config(LoggerConfig::new(name).with_debug(debug_enabled))
    }

    /// Logger that also appends to `log/<file_name>`
    pub fn with_file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        debug_enabled: bool,
    ) -> Self {
        Self::from_config(
            LoggerConfig::new(name)
                .with_file(file_name)
                .with_debug(debug_enabled),
        )
    }

    /// Build a logger from a full configuration.
    /// A file that cannot be opened is reported on stderr and leaves the
    /// logger console-only.
    pub fn from_config(config: LoggerConfig) -> Self {
        let mut logger = Self {
            name: config.name,
            debug_enabled: config.debug_enabled,
            console_enabled: config.console_enabled,
            color_enabled: config.color_enabled,
            log_dir: config.log_dir,
            file_name: None,
            log_file: None,
            interval: config.interval,
            cadence: config.cadence,
            cache: MessageCache::new(config.cache_capacity),
        };
        if let Some(file_name) = config.file_name.as_deref() {
            logger.open_file(file_name);
        }
        logger
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// Turn debug mode on; returns the new state
    pub fn enable_debugging(&mut self) -> bool {
        self.debug_enabled = true;
        self.debug_enabled
    }

    /// Turn debug mode off; returns the new state
    pub fn disable_debugging(&mut self) -> bool {
        self.debug_enabled = false;
        self.debug_enabled
    }

    /// Debug mode lets everything through, otherwise only Info and above
    pub fn should_log(&self, level: LogLevel) -> bool {
        if self.debug_enabled {
            return true;
        }
        level >= LogLevel::Info
    }

    pub fn is_file_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.log_file.as_ref().map(|file| file.path())
    }

    pub fn output_format(&self) -> Option<LogFormat> {
        self.log_file.as_ref().map(|file| file.format())
    }

    /// Replace the output file. The current file is closed first; `None`
    /// leaves the logger console-only. Returns whether a file is now open.
    pub fn set_output_file(&mut self, file_name: Option<&str>) -> bool {
        self.log_file = None;
        self.file_name = None;
        if let Some(file_name) = file_name {
            self.open_file(file_name);
        }
        self.is_file_enabled()
    }

    /// Close the current file and reopen whatever file `other` writes to
    pub fn reopen_like(&mut self, other: &Logger) -> bool {
        self.log_dir = other.log_dir.clone();
        self.set_output_file(other.file_name.as_deref())
    }

    /// Gate, then write to console and file
    pub fn log(&mut self, level: LogLevel, message: impl fmt::Display) {
        if !self.should_log(level) {
            return;
        }

        let message = message.to_string();
        let now = ClockSync::capture();

        if self.console_enabled {
            self.write_to_console(&now, level, &message);
        }
        self.write_to_file_at(now, level, &message);
    }

    /// Record `message` against the clock and append it to the file if the
    /// cadence allows. Returns whether a line was written.
    pub fn write_to_file(&mut self, level: LogLevel, message: &str) -> bool {
        self.write_to_file_at(ClockSync::capture(), level, message)
    }

    /// `write_to_file` with an explicit clock snapshot for "now"
    pub fn write_to_file_at(&mut self, now: ClockSync, level: LogLevel, message: &str) -> bool {
        let Some(log_file) = self.log_file.as_mut() else {
            return false;
        };

        let (entry, created) = self
            .cache
            .get_or_insert_with(message, || LogEntry::new(level, message, now));
        entry.record_occurrence();
        entry.level = level;

        // A brand-new entry counts as fresh, so its first line resets interval_count to 0
        let fresh = created || now.elapsed_since(&entry.last_logged) >= self.interval;
        let write = match self.cadence {
            FileCadence::EveryMessage => true,
            FileCadence::Throttled => fresh,
        };

        if write {
            entry.last_logged = now;
            match log_file.format().render(entry) {
                // Failed appends on an open handle are not reported
                Ok(line) => {
                    let _ = log_file.write_line(&line);
                }
                Err(e) => eprintln!("Logger {} dropped a line: {}", self.name, e),
            }
        }

        match (self.cadence, fresh) {
            (_, true) => entry.interval_count = 0,
            (FileCadence::EveryMessage, false) => entry.interval_count = 1,
            (FileCadence::Throttled, false) => {}
        }

        write
    }

    /// Cached bookkeeping for an exact message text
    pub fn cache_entry(&self, message: &str) -> Option<&LogEntry> {
        self.cache.peek(message)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_metrics(&self) -> CacheMetrics {
        self.cache.metrics()
    }

    pub fn flush(&mut self) {
        if let Some(file) = self.log_file.as_mut() {
            let _ = file.flush();
        }
    }

    fn open_file(&mut self, file_name: &str) {
        match LogFile::open(&self.log_dir, file_name) {
            Ok(file) => {
                self.log_file = Some(file);
                self.file_name = Some(file_name.to_string());
            }
            Err(e) => eprintln!("Logger initialization error: {}", e),
        }
    }

    fn write_to_console(&self, now: &ClockSync, level: LogLevel, message: &str) {
        let line = console_line(&now.timestamp(), &self.name, level, message);
        if self.color_enabled {
            print_stdout_safe(&colorize(&line, level));
        } else {
            print_stdout_safe(&line);
        }
    }
}
