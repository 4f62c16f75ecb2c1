/// Per-message bookkeeping kept in the message cache
use super::clock::ClockSync;
use super::levels::LogLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// When this message last reached the file
    pub last_logged: ClockSync,
    /// Level of the most recent occurrence
    pub level: LogLevel,
    /// Message text, also the cache key
    pub message: String,
    /// Occurrences since the last file line
    pub interval_count: u64,
    /// Occurrences since the entry was created
    pub total_count: u64,
}

impl LogEntry {
    /// Fresh entry with zeroed counters, stamped at `now`
    pub fn new(level: LogLevel, message: impl Into<String>, now: ClockSync) -> Self {
        Self {
            last_logged: now,
            level,
            message: message.into(),
            interval_count: 0,
            total_count: 0,
        }
    }

    /// Count one more occurrence
    pub fn record_occurrence(&mut self) {
        self.interval_count += 1;
        self.total_count += 1;
    }
}
