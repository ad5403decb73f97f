//! Core logger types and traits

pub mod config;
pub mod entry;
pub mod error;
pub mod handler;
pub mod instance;
pub mod labels;
pub mod message;
pub mod metrics;
pub mod output_format;
pub mod severity;
pub mod timestamp;

pub use config::InstanceConfig;
pub use entry::{Entry, EntryRecord};
pub use error::{LoggerError, Result};
pub use handler::Handler;
pub use instance::{Instance, InstanceBuilder, PRINTF_CONTEXT};
pub use labels::{DynamicLabel, LabelStore, Labels};
pub use message::{Message, Value};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use severity::{severity_color, severity_text, Severity, DEFAULT_COLOR};
pub use timestamp::TimestampFormat;
