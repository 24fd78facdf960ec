//! User-facing message output
//!
//! The kiosk surfaces two kinds of messages to the end user: warnings (e.g.
//! starting a delivery with no table selected) and info toasts (e.g. the
//! return location changed). Screens produce [`Notice`] values; an
//! [`OutputWriter`] decides how to show them.
//!
//! # Examples
//!
//! ```
//! use gridpick::output::{MessageBuffer, MessageLevel, Notice, OutputWriter};
//!
//! let output = MessageBuffer::new();
//! output.notify(&Notice::warning("Please select a location first"));
//! assert_eq!(output.latest().unwrap().level, MessageLevel::Warning);
//! ```

use colored::Colorize;
use std::sync::{Arc, Mutex, PoisonError};

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// A message for the end user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: MessageLevel,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, text)
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, text)
    }
}

/// Trait for output operations
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    fn error(&self, message: &str);

    fn success(&self, message: &str);

    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Route a [`Notice`] to the matching level
    fn notify(&self, notice: &Notice) {
        match notice.level {
            MessageLevel::Normal => self.write(&notice.text),
            MessageLevel::Error => self.error(&notice.text),
            MessageLevel::Success => self.success(&notice.text),
            MessageLevel::Warning => self.warning(&notice.text),
            MessageLevel::Info => self.info(&notice.text),
        }
    }
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only normal output and errors are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "⚠️".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Buffered writer that keeps messages for later display or inspection
#[derive(Debug, Clone, Default)]
pub struct MessageBuffer {
    messages: Arc<Mutex<Vec<Notice>>>,
}

impl MessageBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<Notice> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn latest(&self) -> Option<Notice> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn push(&self, level: MessageLevel, message: &str) {
        let mut messages = self.messages.lock().unwrap_or_else(PoisonError::into_inner);
        messages.push(Notice::new(level, message));

        // Keep only last 100 messages
        if messages.len() > 100 {
            messages.drain(0..50);
        }
    }
}

impl OutputWriter for MessageBuffer {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}
