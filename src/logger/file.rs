/// Append-only log file
///
/// The handle is owned by `LogFile` and closed when it is dropped, which
/// covers replacement, teardown and every error path.
use super::format::LogFormat;
use crate::errors::{LoggerError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    format: LogFormat,
    file: File,
}

impl LogFile {
    /// Create `log_dir` if needed and open `log_dir/file_name` for appending
    pub fn open(log_dir: &Path, file_name: &str) -> Result<Self> {
        if !log_dir.exists() {
            fs::create_dir_all(log_dir).map_err(|source| LoggerError::CreateDirectory {
                path: log_dir.to_path_buf(),
                source,
            })?;
        }

        let path = log_dir.join(file_name);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LoggerError::OpenFile {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            format: LogFormat::from_path(&path),
            path,
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Append one line; the newline is added here
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let mut buffer = String::with_capacity(line.len() + 1);
        buffer.push_str(line);
        buffer.push('\n');
        self.file.write_all(buffer.as_bytes())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directory() {
        let temp = TempDir::new().unwrap();
        let log_dir = temp.path().join("nested").join("log");

        let file = LogFile::open(&log_dir, "app.json").unwrap();

        assert!(log_dir.is_dir());
        assert_eq!(file.path(), log_dir.join("app.json"));
        assert_eq!(file.format(), LogFormat::Json);
    }

    #[test]
    fn test_append_preserves_existing_contents() {
        let temp = TempDir::new().unwrap();

        {
            let mut file = LogFile::open(temp.path(), "app.log").unwrap();
            file.write_line("first").unwrap();
        }
        {
            let mut file = LogFile::open(temp.path(), "app.log").unwrap();
            file.write_line("second").unwrap();
        }

        let contents = fs::read_to_string(temp.path().join("app.log")).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_open_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        // A regular file where the directory should be
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = LogFile::open(&blocker, "app.log").unwrap_err();
        assert!(matches!(err, LoggerError::OpenFile { .. }));
    }
}
