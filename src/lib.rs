//! # Labelled Logger
//!
//! A severity-leveled logging library. An [`Instance`] hands out entries
//! for a named context; each entry carries a snapshot of the instance's
//! key/value labels, collects its own labels, and is dispatched to a
//! pluggable [`Handler`] by a terminal severity call.
//!
//! ## Features
//!
//! - **Six severities**: `FATAL` (most severe) through `TRACE`, with a
//!   per-instance threshold
//! - **Labels**: static or dynamic, deduplicated and sorted by key
//! - **Handlers**: console, any `Write` destination, in-memory, or custom
//! - **Thread Safe**: instances are shared with `Arc` and never fail the caller
//!
//! ```
//! use labelled_logger::prelude::*;
//!
//! let logger = Instance::new();
//! logger.set_label("service", "checkout");
//!
//! logger.context("payment").label("order", 42).error("card declined");
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Entry, EntryRecord, Handler, Instance, InstanceBuilder, InstanceConfig, LabelStore,
        Labels, LoggerError, LoggerMetrics, Message, OutputFormat, Result, Severity,
        TimestampFormat, Value,
    };
    pub use crate::handlers::{ConsoleHandler, MemoryHandler, WriterHandler};
}

pub use crate::core::{
    severity_color, severity_text, DynamicLabel, Entry, EntryRecord, Handler, Instance,
    InstanceBuilder, InstanceConfig, LabelStore, Labels, LoggerError, LoggerMetrics, Message,
    OutputFormat, Result, Severity, TimestampFormat, Value, PRINTF_CONTEXT,
};
pub use handlers::{ConsoleHandler, MemoryHandler, WriterHandler};
