//! Dedicated writer thread for log output.

use crate::error::Result;
use crate::message::LogMessage;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::Receiver;

/// Owns the output sinks and drains the message channel.
pub(crate) struct LogWriter {
    file: Option<File>,
    console: bool,
}

impl LogWriter {
    /// Creates a writer. The file (if any) is opened in append mode.
    pub fn new(log_path: Option<&Path>, console: bool) -> Result<Self> {
        let file = match log_path {
            Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
            None => None,
        };
        Ok(Self { file, console })
    }

    fn write_message(&mut self, message: &LogMessage) {
        let line = message.format();

        if self.console {
            print!("{}", line);
        }

        if let Some(file) = self.file.as_mut() {
            if let Err(e) = file.write_all(line.as_bytes()) {
                eprintln!("Error writing log: {}", e);
                return;
            }
            if let Err(e) = file.flush() {
                eprintln!("Error flushing log: {}", e);
            }
        }
    }

    /// Runs the writer loop until every sender is dropped.
    pub fn run(mut self, receiver: Receiver<LogMessage>) {
        for message in receiver {
            self.write_message(&message);
        }
    }
}

/// Spawns the writer thread shared by all clones of a logger.
pub(crate) fn spawn_writer_thread(
    log_path: Option<&Path>,
    console: bool,
    receiver: Receiver<LogMessage>,
) -> Result<()> {
    let writer = LogWriter::new(log_path, console)?;
    std::thread::spawn(move || writer.run(receiver));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LogLevel;
    use std::fs;
    use std::sync::mpsc::channel;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_writer_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let writer = LogWriter::new(Some(&log_path), false);
        assert!(writer.is_ok());
        assert!(log_path.exists());
    }

    #[test]
    fn test_write_message_to_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let mut writer = LogWriter::new(Some(&log_path), false).unwrap();
        writer.write_message(&LogMessage::new(LogLevel::Info, None, "hello".to_string()));

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("INFO"));
        assert!(content.contains("hello"));
    }

    #[test]
    fn test_spawn_writer_thread() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");
        let (sender, receiver) = channel();

        spawn_writer_thread(Some(&log_path), false, receiver).unwrap();

        sender
            .send(LogMessage::new(LogLevel::Debug, None, "threaded".to_string()))
            .unwrap();
        drop(sender);

        thread::sleep(Duration::from_millis(100));

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("threaded"));
    }
}
