//! Log entry structure

use super::instance::Instance;
use super::labels::Labels;
use super::message::Message;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Owned data of a log entry.
///
/// Handlers that need to keep an entry beyond the dispatch call take a
/// record through [`Entry::record`] or [`Entry::to_record`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryRecord {
    pub context: String,
    /// `None` until a terminal severity call
    pub severity: Option<Severity>,
    pub labels: Labels,
    pub message: Message,
    pub timestamp: DateTime<Utc>,
}

/// A single emission unit, created by [`Instance::context`].
///
/// The entry owns a copy of the instance's labels taken at creation time.
/// Labels added with [`Entry::label`] stay on this entry only.
///
/// Each terminal severity call sets the severity and message and dispatches
/// the entry through the owning instance. Calling a terminal method again
/// on the same entry dispatches it again with the new severity and message.
///
/// # Example
///
/// ```
/// use labelled_logger::prelude::*;
///
/// let handler = MemoryHandler::new();
/// let logger = Instance::with_handler(handler.clone());
/// logger.set_label("service", "checkout");
///
/// logger.context("payment").label("order", 42).error("card declined");
///
/// let records = handler.records();
/// assert_eq!(records[0].labels.format_fields(), "order=42 service=checkout");
/// ```
pub struct Entry<'a> {
    instance: &'a Instance,
    record: EntryRecord,
}

impl<'a> Entry<'a> {
    pub(crate) fn new(instance: &'a Instance, context: String, labels: Labels) -> Self {
        Self {
            instance,
            record: EntryRecord {
                context,
                severity: None,
                labels,
                message: Message::new(),
                timestamp: Utc::now(),
            },
        }
    }

    pub fn context(&self) -> &str {
        &self.record.context
    }

    pub fn severity(&self) -> Option<Severity> {
        self.record.severity
    }

    /// Canonical severity text, empty before a terminal call.
    pub fn severity_text(&self) -> &'static str {
        self.record.severity.map_or("", Severity::as_str)
    }

    pub fn labels(&self) -> &Labels {
        &self.record.labels
    }

    pub fn message(&self) -> &Message {
        &self.record.message
    }

    /// Time of the most recent terminal call, or of creation before one.
    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.record.timestamp
    }

    pub fn record(&self) -> &EntryRecord {
        &self.record
    }

    pub fn to_record(&self) -> EntryRecord {
        self.record.clone()
    }

    /// Set a label on this entry only. The same entry is returned.
    #[must_use = "the entry is only logged by a terminal severity call"]
    pub fn label(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.record.labels.set(key, value.to_string());
        self
    }

    /// Set the severity and message, then hand the entry to the instance.
    pub fn log(&mut self, severity: Severity, message: impl Into<Message>) {
        self.record.severity = Some(severity);
        self.record.message = message.into();
        self.record.timestamp = Utc::now();
        self.instance.log(self);
    }

    /// Like [`Entry::log`] with a single pre-formatted message.
    pub fn log_fmt(&mut self, severity: Severity, args: fmt::Arguments<'_>) {
        self.log(severity, Message::formatted(args));
    }

    pub fn trace(&mut self, message: impl Into<Message>) {
        self.log(Severity::Trace, message);
    }

    pub fn trace_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.log_fmt(Severity::Trace, args);
    }

    pub fn debug(&mut self, message: impl Into<Message>) {
        self.log(Severity::Debug, message);
    }

    pub fn debug_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.log_fmt(Severity::Debug, args);
    }

    pub fn info(&mut self, message: impl Into<Message>) {
        self.log(Severity::Info, message);
    }

    pub fn info_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.log_fmt(Severity::Info, args);
    }

    pub fn warn(&mut self, message: impl Into<Message>) {
        self.log(Severity::Warn, message);
    }

    pub fn warn_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.log_fmt(Severity::Warn, args);
    }

    pub fn error(&mut self, message: impl Into<Message>) {
        self.log(Severity::Error, message);
    }

    pub fn error_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.log_fmt(Severity::Error, args);
    }

    /// Log at `FATAL`. This does not terminate the process.
    pub fn fatal(&mut self, message: impl Into<Message>) {
        self.log(Severity::Fatal, message);
    }

    pub fn fatal_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.log_fmt(Severity::Fatal, args);
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("context", &self.record.context)
            .field("severity", &self.record.severity)
            .field("labels", &self.record.labels)
            .field("message", &self.record.message)
            .finish()
    }
}
