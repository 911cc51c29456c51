//! Thread-safe asynchronous logger implementation.
//!
//! This module provides the main [`Logger`] interface. Messages are handed
//! to a dedicated writer thread, so logging never blocks the caller.

use crate::error::Result;
use crate::level::LogLevel;
use crate::message::LogMessage;
use crate::writer::spawn_writer_thread;
use std::path::Path;
use std::sync::mpsc::{Sender, channel};

/// Thread-safe, non-blocking logger.
///
/// Cloneable instances share the same channel to a single writer thread.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LogLevel};
///
/// let logger = Logger::to_console(LogLevel::Info);
/// logger.info("Client started");
/// logger.error("Connection failed");
/// ```
#[derive(Clone)]
pub struct Logger {
    sender: Sender<LogMessage>,
    level: LogLevel,
    component: Option<String>,
}

impl Logger {
    /// Creates a logger that writes to a file (created if it doesn't exist).
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created or opened.
    pub fn to_file<P: AsRef<Path>>(log_path: P, level: LogLevel) -> Result<Self> {
        Self::spawn(Some(log_path.as_ref()), false, level)
    }

    /// Creates a logger that writes to standard output only.
    pub fn to_console(level: LogLevel) -> Self {
        // Console-only setup cannot fail: there is no file to open.
        Self::spawn(None, true, level).expect("console logger")
    }

    /// Creates a logger that writes both to a file and to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created or opened.
    pub fn to_file_and_console<P: AsRef<Path>>(log_path: P, level: LogLevel) -> Result<Self> {
        Self::spawn(Some(log_path.as_ref()), true, level)
    }

    fn spawn(log_path: Option<&Path>, console: bool, level: LogLevel) -> Result<Self> {
        let (sender, receiver) = channel();
        spawn_writer_thread(log_path, console, receiver)?;
        Ok(Logger {
            sender,
            level,
            component: None,
        })
    }

    /// Returns a clone tagged with a component name, sharing this logger's
    /// writer thread.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{Logger, LogLevel};
    ///
    /// let logger = Logger::to_console(LogLevel::Info);
    /// let tls_logger = logger.for_component("TLS");
    /// tls_logger.info("Handshake complete");
    /// ```
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            sender: self.sender.clone(),
            level: self.level,
            component: Some(component.to_string()),
        }
    }

    /// Logs a debug message (only if level is Debug).
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs an informational message.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message (always recorded).
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Filters by level and sends the message to the writer thread.
    fn log(&self, level: LogLevel, message: &str) {
        if level >= self.level {
            let msg = LogMessage::new(level, self.component.clone(), message.to_string());
            let _ = self.sender.send(msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn wait_for_write() {
        thread::sleep(Duration::from_millis(50));
    }

    #[test]
    fn test_logger_writes_to_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::to_file(&log_path, LogLevel::Debug).unwrap();
        logger.info("Test message");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Test message"));
    }

    #[test]
    fn test_logger_respects_level() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::to_file(&log_path, LogLevel::Warn).unwrap();
        logger.debug("Debug message");
        logger.info("Info message");
        logger.warn("Warn message");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(!content.contains("Debug message"));
        assert!(!content.contains("Info message"));
        assert!(content.contains("Warn message"));
    }

    #[test]
    fn test_component_clone_shares_writer() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::to_file(&log_path, LogLevel::Info).unwrap();
        let tagged = logger.for_component("Transport");

        logger.info("plain entry");
        tagged.info("tagged entry");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("plain entry"));
        assert!(content.contains("[Transport]: tagged entry"));
    }

    #[test]
    fn test_logger_clone_across_threads() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::to_file(&log_path, LogLevel::Info).unwrap();
        let logger_clone = logger.clone();

        let handle = thread::spawn(move || {
            logger_clone.info("Message from thread");
        });
        handle.join().unwrap();

        logger.info("Message from main");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Message from thread"));
        assert!(content.contains("Message from main"));
    }
}
