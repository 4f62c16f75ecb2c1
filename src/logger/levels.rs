/// Log level definitions for leveled logging
///
/// Levels are ordered by severity (Trace < Debug < Info < Warning < Error < Fatal < Off)
/// so the gate can compare against a threshold.
use colored::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace = 0,   // Very detailed tracing
    Debug = 1,   // Diagnostics, hidden unless debug mode is on
    Info = 2,    // Standard operational messages
    Warning = 3, // Issues that need attention
    Error = 4,   // Failures
    Fatal = 5,   // Unrecoverable failures
    Off = 6,
}

impl LogLevel {
    /// Every level that has a logging method, in severity order
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Uppercase label used in console and file lines
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Off => "OFF",
        }
    }

    /// Console color for this level, `None` means plain output
    pub fn color(&self) -> Option<Color> {
        match self {
            LogLevel::Trace => Some(Color::Green),
            LogLevel::Debug => Some(Color::Blue),
            LogLevel::Info => Some(Color::Cyan),
            LogLevel::Warning => Some(Color::Yellow),
            LogLevel::Error => Some(Color::Red),
            LogLevel::Fatal => Some(Color::Magenta),
            LogLevel::Off => None,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TRACE" | "VERBOSE" => Some(LogLevel::Trace),
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARNING" | "WARN" => Some(LogLevel::Warning),
            "ERROR" => Some(LogLevel::Error),
            "FATAL" => Some(LogLevel::Fatal),
            "OFF" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
