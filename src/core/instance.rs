//! Logger instance implementation

use super::{
    config::InstanceConfig,
    entry::Entry,
    error::Result,
    handler::Handler,
    labels::{LabelStore, Labels},
    metrics::LoggerMetrics,
    severity::Severity,
};
use crate::handlers::ConsoleHandler;
use parking_lot::RwLock;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Context name used by [`Instance::print`].
pub const PRINTF_CONTEXT: &str = "Printf";

/// Entry factory and severity gate.
///
/// An instance owns a minimum severity (default `INFO`), a label store that
/// every new entry copies, and exactly one handler. All methods take `&self`;
/// share an instance between threads with `Arc<Instance>`.
///
/// There is no process-wide default instance. Construct one at startup and
/// pass it to the code that logs.
pub struct Instance {
    min_severity: RwLock<Severity>,
    labels: LabelStore,
    handler: Arc<dyn Handler>,
    /// Metrics for observability (dispatched, filtered, failures)
    metrics: LoggerMetrics,
}

impl Instance {
    /// Create an instance logging to a [`ConsoleHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_handler(ConsoleHandler::new())
    }

    #[must_use]
    pub fn with_handler<H: Handler + 'static>(handler: H) -> Self {
        Self::with_shared_handler(Arc::new(handler))
    }

    #[must_use]
    pub fn with_shared_handler(handler: Arc<dyn Handler>) -> Self {
        Self {
            min_severity: RwLock::new(Severity::Info),
            labels: LabelStore::new(),
            handler,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a builder for Instance
    ///
    /// # Example
    /// ```
    /// use labelled_logger::prelude::*;
    ///
    /// let logger = Instance::builder()
    ///     .min_severity(Severity::Debug)
    ///     .handler(MemoryHandler::new())
    ///     .label("service", "checkout")
    ///     .build();
    ///
    /// assert_eq!(logger.min_severity_text(), "DEBUG");
    /// ```
    #[must_use]
    pub fn builder() -> InstanceBuilder {
        InstanceBuilder::new()
    }

    /// Start a new entry for the unit of work `name`.
    ///
    /// The entry receives a snapshot of the instance's labels, with dynamic
    /// labels evaluated now. Later label changes on either side do not
    /// affect the other.
    pub fn context(&self, name: impl Into<String>) -> Entry<'_> {
        let labels = self.labels.snapshot_with(|_| {
            self.metrics.record_label_failure();
        });
        Entry::new(self, name.into(), labels)
    }

    /// Dispatch `entry` to the handler unless it is less severe than the threshold.
    ///
    /// Entries without a severity are dropped. `FATAL` always passes.
    /// Handler errors and panics are reported on stderr and counted, never
    /// returned.
    pub fn log(&self, entry: &Entry<'_>) {
        let Some(severity) = entry.severity() else {
            self.metrics.record_filtered();
            return;
        };
        if severity > *self.min_severity.read() {
            self.metrics.record_filtered();
            return;
        }
        self.dispatch(entry);
    }

    fn dispatch(&self, entry: &Entry<'_>) {
        self.metrics.record_dispatched();

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.handler.log(entry)));
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                self.metrics.record_handler_failure();
                eprintln!(
                    "[LOGGER ERROR] Handler '{}' failed: {}",
                    self.handler.name(),
                    e
                );
            }
            Err(panic_info) => {
                self.metrics.record_handler_failure();
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Handler '{}' panicked: {}",
                    self.handler.name(),
                    panic_msg
                );
            }
        }
    }

    /// Set the threshold from its canonical text.
    ///
    /// Invalid text returns [`LoggerError::InvalidSeverity`](super::LoggerError)
    /// and leaves the threshold unchanged.
    pub fn set_min_severity(&self, text: &str) -> Result<()> {
        let severity: Severity = text.parse()?;
        self.set_min_severity_level(severity);
        Ok(())
    }

    pub fn set_min_severity_level(&self, severity: Severity) {
        *self.min_severity.write() = severity;
    }

    pub fn min_severity(&self) -> Severity {
        *self.min_severity.read()
    }

    pub fn min_severity_text(&self) -> &'static str {
        self.min_severity().as_str()
    }

    pub fn set_label(&self, key: impl Into<String>, value: impl fmt::Display) {
        self.labels.set(key, value.to_string());
    }

    pub fn set_dynamic_label<F>(&self, key: impl Into<String>, producer: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.labels.set_dynamic(key, producer);
    }

    pub fn remove_label(&self, key: &str) -> bool {
        self.labels.remove(key)
    }

    /// Evaluated copy of the instance's labels.
    pub fn labels(&self) -> Labels {
        self.labels.snapshot_with(|_| {
            self.metrics.record_label_failure();
        })
    }

    /// Log `args` at `INFO` under the `Printf` context.
    ///
    /// For collaborators that expect a printf-style logging sink.
    pub fn print(&self, args: fmt::Arguments<'_>) {
        self.context(PRINTF_CONTEXT).info_fmt(args);
    }

    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use labelled_logger::prelude::*;
    ///
    /// let logger = Instance::with_handler(MemoryHandler::new());
    /// logger.context("startup").debug("hidden at the default threshold");
    ///
    /// assert_eq!(logger.metrics().filtered(), 1);
    /// assert_eq!(logger.metrics().dispatched(), 0);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.handler.flush()
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("min_severity", &self.min_severity())
            .field("labels", &self.labels.len())
            .field("handler", &self.handler.name())
            .finish()
    }
}

/// Builder for constructing Instance with a fluent API
///
/// # Example
/// ```
/// use labelled_logger::prelude::*;
///
/// let logger = Instance::builder()
///     .min_severity(Severity::Warn)
///     .handler(ConsoleHandler::with_colors(false))
///     .label("region", "eu-west-1")
///     .dynamic_label("pid", || std::process::id().to_string())
///     .build();
/// ```
pub struct InstanceBuilder {
    min_severity: Severity,
    handler: Option<Arc<dyn Handler>>,
    labels: LabelStore,
}

impl InstanceBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_severity: Severity::Info,
            handler: None,
            labels: LabelStore::new(),
        }
    }

    /// Apply a deserialized configuration on top of the current settings
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: InstanceConfig) -> Self {
        self.min_severity = config.min_severity;
        for (key, value) in config.labels {
            self.labels.set(key, value);
        }
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Defaults to a [`ConsoleHandler`] when not called.
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handler = Some(handler);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn label(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.labels.set(key, value.to_string());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn dynamic_label<F>(self, key: impl Into<String>, producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.labels.set_dynamic(key, producer);
        self
    }

    /// Build the Instance
    pub fn build(self) -> Instance {
        let handler = self
            .handler
            .unwrap_or_else(|| Arc::new(ConsoleHandler::new()));
        Instance {
            min_severity: RwLock::new(self.min_severity),
            labels: self.labels,
            handler,
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for InstanceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
