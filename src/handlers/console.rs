//! Console handler implementation

use super::effective_labels;
use crate::core::{
    Entry, Handler, LabelStore, LoggerError, OutputFormat, Result, Severity, TimestampFormat,
};
use std::io::Write;

/// Output stream selected for an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// `ERROR` and `FATAL` go to stderr, everything else to stdout.
    pub fn for_severity(severity: Option<Severity>) -> Self {
        match severity {
            Some(s) if s.is_error() => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// Writes one line per entry to stdout or stderr.
///
/// The default rendering is
/// `SEVERITY timestamp context [key=value ...]: message`, with the severity
/// colored. Ambient labels configured on the handler are merged into every
/// rendered line.
pub struct ConsoleHandler {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    ambient: LabelStore,
}

impl ConsoleHandler {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
            ambient: LabelStore::new(),
        }
    }

    /// Set the output format for this handler
    ///
    /// # Example
    ///
    /// ```
    /// use labelled_logger::handlers::ConsoleHandler;
    /// use labelled_logger::OutputFormat;
    ///
    /// let handler = ConsoleHandler::new()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    /// Add a label rendered on every line this handler writes.
    #[must_use]
    pub fn with_ambient_label(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.ambient.set(key, value);
        self
    }

    /// Add an ambient label evaluated each time a line is rendered.
    ///
    /// ```
    /// use labelled_logger::handlers::ConsoleHandler;
    ///
    /// let handler = ConsoleHandler::new()
    ///     .with_dynamic_ambient_label("pid", || std::process::id().to_string());
    /// ```
    #[must_use]
    pub fn with_dynamic_ambient_label<F>(self, key: impl Into<String>, producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.ambient.set_dynamic(key, producer);
        self
    }

    /// Ambient labels, adjustable while the handler is in use.
    pub fn ambient(&self) -> &LabelStore {
        &self.ambient
    }

    /// Render `entry` as it would be written, without the newline.
    pub fn render(&self, entry: &Entry<'_>) -> String {
        let labels = effective_labels(entry, &self.ambient);
        if self.use_colors {
            self.output_format
                .format_colored(entry, &labels, &self.timestamp_format)
        } else {
            self.output_format
                .format(entry, &labels, &self.timestamp_format)
        }
    }
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for ConsoleHandler {
    fn log(&self, entry: &Entry<'_>) -> Result<()> {
        let line = self.render(entry);

        match Stream::for_severity(entry.severity()) {
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{}", line)
                .map_err(|e| LoggerError::io_operation("writing to stderr", "entry lost", e)),
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{}", line)
                .map_err(|e| LoggerError::io_operation("writing to stdout", "entry lost", e)),
        }
    }

    fn flush(&self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
