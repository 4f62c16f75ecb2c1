//! Line rendering for console and file output
//!
//! Handles:
//! - Output format selection from the log file's extension
//! - Plain text, CSV and JSON file lines
//! - Colorized console lines
//! - Broken pipe handling for piped commands

use super::entry::LogEntry;
use super::levels::LogLevel;
use crate::errors::Result;
use serde::Serialize;
use std::io::{stdout, ErrorKind, Write};
use std::path::Path;

/// On-disk encoding of a log file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    PlainText,
    Csv,
    Json,
}

impl LogFormat {
    /// Pick the format from a file extension; anything unknown is plain text
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => LogFormat::Csv,
            Some("json") => LogFormat::Json,
            _ => LogFormat::PlainText,
        }
    }

    /// Render one file line for `entry`, without the trailing newline
    pub fn render(&self, entry: &LogEntry) -> Result<String> {
        match self {
            LogFormat::PlainText => Ok(plain_text_line(entry)),
            LogFormat::Csv => csv_line(entry),
            LogFormat::Json => json_line(entry),
        }
    }
}

/// `[timestamp][LEVEL]: message`
pub fn plain_text_line(entry: &LogEntry) -> String {
    format!(
        "[{}][{}]: {}",
        entry.last_logged.timestamp(),
        entry.level,
        entry.message
    )
}

/// `timestamp,LEVEL,message,interval_count,total_count`
///
/// Fields are quoted only when they contain a comma, quote or line break.
pub fn csv_line(entry: &LogEntry) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record([
        entry.last_logged.timestamp(),
        entry.level.as_str().to_string(),
        entry.message.clone(),
        entry.interval_count.to_string(),
        entry.total_count.to_string(),
    ])?;

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes)
        .trim_end_matches('\n')
        .to_string())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonLine<'a> {
    timestamp: String,
    level: &'a str,
    message: &'a str,
    interval_count: u64,
    total_count: u64,
}

/// One JSON object per line
pub fn json_line(entry: &LogEntry) -> Result<String> {
    let line = JsonLine {
        timestamp: entry.last_logged.timestamp(),
        level: entry.level.as_str(),
        message: &entry.message,
        interval_count: entry.interval_count,
        total_count: entry.total_count,
    };
    Ok(serde_json::to_string(&line)?)
}

/// `[timestamp] [name] [LEVEL]: message`
pub fn console_line(timestamp: &str, name: &str, level: LogLevel, message: &str) -> String {
    format!("[{}] [{}] [{}]: {}", timestamp, name, level, message)
}

/// ANSI reset written after every colored line
const ANSI_RESET: &str = "\x1b[0m";

/// Wrap a whole console line in the level's color; the reset code closes it.
/// Always emits the codes: whether to color is the logger's decision, not
/// the terminal's.
pub fn colorize(line: &str, level: LogLevel) -> String {
    match level.color() {
        Some(color) => format!("\x1b[{}m{}{}", color.to_fg_str(), line, ANSI_RESET),
        None => line.to_string(),
    }
}

/// Print to stdout but ignore broken pipe errors
pub fn print_stdout_safe(message: &str) {
    let mut out = stdout().lock();
    if let Err(e) = writeln!(out, "{}", message) {
        if e.kind() != ErrorKind::BrokenPipe {
            let _ = writeln!(std::io::stderr(), "Logger stdout error: {}", e);
        }
        return;
    }
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::ClockSync;

    fn sample_entry(message: &str) -> LogEntry {
        let mut entry = LogEntry::new(LogLevel::Warning, message, ClockSync::capture());
        entry.interval_count = 2;
        entry.total_count = 7;
        entry
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(LogFormat::from_path(Path::new("x.csv")), LogFormat::Csv);
        assert_eq!(LogFormat::from_path(Path::new("x.JSON")), LogFormat::Json);
        assert_eq!(LogFormat::from_path(Path::new("x.log")), LogFormat::PlainText);
        assert_eq!(LogFormat::from_path(Path::new("noext")), LogFormat::PlainText);
    }

    #[test]
    fn test_plain_text_line() {
        let entry = sample_entry("disk almost full");
        let expected = format!(
            "[{}][WARNING]: disk almost full",
            entry.last_logged.timestamp()
        );
        assert_eq!(plain_text_line(&entry), expected);
    }

    #[test]
    fn test_csv_line() {
        let entry = sample_entry("disk almost full");
        let expected = format!(
            "{},WARNING,disk almost full,2,7",
            entry.last_logged.timestamp()
        );
        assert_eq!(csv_line(&entry).unwrap(), expected);
    }

    #[test]
    fn test_csv_line_quotes_embedded_commas() {
        let entry = sample_entry("a, b and \"c\"");
        let line = csv_line(&entry).unwrap();
        assert!(line.ends_with(",WARNING,\"a, b and \"\"c\"\"\",2,7"));
    }

    #[test]
    fn test_json_line_shape() {
        let entry = sample_entry("quote \" inside");
        let line = json_line(&entry).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["timestamp"], entry.last_logged.timestamp());
        assert_eq!(value["level"], "WARNING");
        assert_eq!(value["message"], "quote \" inside");
        assert_eq!(value["intervalCount"], 2);
        assert_eq!(value["totalCount"], 7);
        assert_eq!(value.as_object().unwrap().len(), 5);
        assert!(line.starts_with("{\"timestamp\":"));
    }

    #[test]
    fn test_console_line() {
        let line = console_line("2025-01-20 10:00:00.000", "Client", LogLevel::Info, "ready");
        assert_eq!(line, "[2025-01-20 10:00:00.000] [Client] [INFO]: ready");
    }

    #[test]
    fn test_colorize_resets_at_end() {
        // No override: stdout under the test harness is not a terminal
        let line = colorize("[ts] [Client] [ERROR]: boom", LogLevel::Error);
        assert_eq!(line, "\x1b[31m[ts] [Client] [ERROR]: boom\x1b[0m");
        assert_eq!(colorize("plain", LogLevel::Off), "plain");
    }

    #[test]
    fn test_colorize_every_level() {
        let expected = [
            (LogLevel::Trace, "32"),
            (LogLevel::Debug, "34"),
            (LogLevel::Info, "36"),
            (LogLevel::Warning, "33"),
            (LogLevel::Error, "31"),
            (LogLevel::Fatal, "35"),
        ];
        for (level, code) in expected {
            let line = colorize("x", level);
            assert_eq!(line, format!("\x1b[{}mx\x1b[0m", code), "{}", level);
        }
    }
}
