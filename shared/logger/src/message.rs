//! Internal log message structure.

use crate::level::LogLevel;
use chrono::Local;

/// A single formatted log entry queued for the writer thread.
#[derive(Debug, Clone)]
pub(crate) struct LogMessage {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogMessage {
    /// Creates a log message stamped with the current local time.
    pub fn new(level: LogLevel, component: Option<String>, message: String) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            level,
            component,
            message,
        }
    }

    /// Formats the entry as one output line:
    /// `[timestamp] LEVEL [component]: message\n`
    pub fn format(&self) -> String {
        match &self.component {
            Some(component) => format!(
                "[{}] {} [{}]: {}\n",
                self.timestamp,
                self.level.as_str(),
                component,
                self.message
            ),
            None => format!(
                "[{}] {}: {}\n",
                self.timestamp,
                self.level.as_str(),
                self.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_without_component() {
        let msg = LogMessage::new(LogLevel::Error, None, "Connection failed".to_string());
        let line = msg.format();

        assert!(line.contains("ERROR"));
        assert!(line.contains("Connection failed"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_format_with_component() {
        let msg = LogMessage::new(
            LogLevel::Info,
            Some("Transport".to_string()),
            "sent".to_string(),
        );
        assert!(msg.format().contains("[Transport]"));
    }

    #[test]
    fn test_timestamp_shape() {
        let msg = LogMessage::new(LogLevel::Info, None, "t".to_string());

        // YYYY-MM-DD HH:MM:SS.mmm
        assert!(msg.timestamp.len() >= 23);
        assert!(msg.timestamp.contains(':'));
        assert!(msg.timestamp.contains('.'));
    }
}
