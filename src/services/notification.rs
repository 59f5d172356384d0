//! Notification service
//!
//! Collects severity-tagged messages for the editor console and writes them
//! to a log file on shutdown. Every message is also forwarded to the `log`
//! facade so it shows up in the terminal.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Message severity, in console display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Error];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    fn log_level(&self) -> log::Level {
        match self {
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }
}

/// Severity-grouped message store
#[derive(Debug, Default)]
pub struct NotificationService {
    messages: BTreeMap<Severity, Vec<String>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        log::log!(severity.log_level(), "{}", message);
        self.messages.entry(severity).or_default().push(message);
    }

    /// Shorthand for an info message
    pub fn log(&mut self, message: impl Into<String>) {
        self.add_message(Severity::Info, message);
    }

    /// All messages of one severity joined by newlines, None if there are none
    pub fn get_message(&self, severity: Severity) -> Option<String> {
        let messages = self.messages.get(&severity)?;
        let mut combined = String::new();
        for message in messages {
            combined.push_str(message);
            combined.push('\n');
        }
        Some(combined)
    }

    pub fn messages_for(&self, severity: Severity) -> &[String] {
        self.messages.get(&severity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All messages grouped by severity
    pub fn notifications(&self) -> &BTreeMap<Severity, Vec<String>> {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// Dump everything to the log at debug level
    pub fn show_all_messages(&self) {
        for (severity, messages) in &self.messages {
            log::debug!("Code: {} - Messages:", severity.label());
            for message in messages {
                log::debug!("   {}", message);
            }
        }
    }

    /// Write the report format used by the log file
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (severity, messages) in &self.messages {
            writeln!(out, "Code: {} - Messages:", severity.label())?;
            for message in messages {
                writeln!(out, "   {}", message)?;
            }
        }
        Ok(())
    }

    pub fn save_messages_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write_report(&mut out)?;
        out.flush()?;
        log::info!("Messages saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_grouped_by_severity() {
        let mut notes = NotificationService::new();
        notes.log("window ok");
        notes.add_message(Severity::Error, "texture missing");
        notes.log("actors ok");

        assert_eq!(notes.message_count(), 3);
        assert_eq!(notes.messages_for(Severity::Info), ["window ok", "actors ok"]);
        assert_eq!(notes.messages_for(Severity::Error), ["texture missing"]);
        assert!(notes.messages_for(Severity::Warning).is_empty());
    }

    #[test]
    fn test_get_message_joins_lines() {
        let mut notes = NotificationService::new();
        assert!(notes.get_message(Severity::Info).is_none());

        notes.log("a");
        notes.log("b");
        assert_eq!(notes.get_message(Severity::Info).as_deref(), Some("a\nb\n"));
    }

    #[test]
    fn test_report_format() {
        let mut notes = NotificationService::new();
        notes.add_message(Severity::Warning, "fallback texture");
        notes.log("started");

        let mut out = Vec::new();
        notes.write_report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Code: INFO - Messages:\n   started\nCode: WARNING - Messages:\n   fallback texture\n"
        );
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Messages.txt");

        let mut notes = NotificationService::new();
        notes.add_message(Severity::Error, "boom");
        notes.save_messages_to_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Code: ERROR - Messages:"));
        assert!(text.contains("   boom"));
    }
}
