//! Writer handler implementation

use super::effective_labels;
use crate::core::{Entry, Handler, LabelStore, OutputFormat, Result, TimestampFormat};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one line per entry to any [`Write`] destination.
///
/// Unlike [`ConsoleHandler`](super::ConsoleHandler) every severity goes to
/// the same writer, without colors.
pub struct WriterHandler<W: Write + Send> {
    writer: Mutex<W>,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    ambient: LabelStore,
}

impl WriterHandler<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed.
    ///
    /// ```no_run
    /// use labelled_logger::handlers::WriterHandler;
    /// use labelled_logger::OutputFormat;
    ///
    /// let handler = WriterHandler::file("/var/log/app.jsonl")
    ///     .unwrap()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> WriterHandler<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
            ambient: LabelStore::new(),
        }
    }

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

    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    #[must_use]
    pub fn with_ambient_label(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.ambient.set(key, value);
        self
    }

    #[must_use]
    pub fn with_dynamic_ambient_label<F>(self, key: impl Into<String>, producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.ambient.set_dynamic(key, producer);
        self
    }

    pub fn ambient(&self) -> &LabelStore {
        &self.ambient
    }
}

impl<W: Write + Send> Handler for WriterHandler<W> {
    fn log(&self, entry: &Entry<'_>) -> Result<()> {
        let labels = effective_labels(entry, &self.ambient);
        let line = self
            .output_format
            .format(entry, &labels, &self.timestamp_format);

        writeln!(self.writer.lock(), "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
