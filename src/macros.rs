//! Logging macros for ergonomic message formatting.
//!
//! Each macro takes an entry expression followed by `format!`-style
//! arguments and dispatches a single formatted message, like the `*_fmt`
//! methods of [`Entry`](crate::core::Entry).
//!
//! # Examples
//!
//! ```
//! use labelled_logger::prelude::*;
//! use labelled_logger::info;
//!
//! let logger = Instance::with_handler(MemoryHandler::new());
//!
//! info!(logger.context("server"), "Server started");
//!
//! let port = 8080;
//! info!(logger.context("server").label("port", port), "Listening on port {}", port);
//! ```

/// Log a formatted message at the given severity.
///
/// # Examples
///
/// ```
/// # use labelled_logger::prelude::*;
/// # let logger = Instance::with_handler(MemoryHandler::new());
/// use labelled_logger::log;
/// log!(logger.context("db"), Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($entry:expr, $severity:expr, $($arg:tt)+) => {
        $entry.log_fmt($severity, format_args!($($arg)+))
    };
}

/// Log a formatted trace-level message.
///
/// ```
/// # use labelled_logger::prelude::*;
/// # let logger = Instance::builder().min_severity(Severity::Trace).handler(MemoryHandler::new()).build();
/// use labelled_logger::trace;
/// trace!(logger.context("calc"), "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($entry:expr, $($arg:tt)+) => {
        $crate::log!($entry, $crate::Severity::Trace, $($arg)+)
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debug {
    ($entry:expr, $($arg:tt)+) => {
        $crate::log!($entry, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! info {
    ($entry:expr, $($arg:tt)+) => {
        $crate::log!($entry, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a formatted warning-level message.
///
/// ```
/// # use labelled_logger::prelude::*;
/// # let logger = Instance::with_handler(MemoryHandler::new());
/// use labelled_logger::warn;
/// warn!(logger.context("client"), "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($entry:expr, $($arg:tt)+) => {
        $crate::log!($entry, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! error {
    ($entry:expr, $($arg:tt)+) => {
        $crate::log!($entry, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a formatted fatal-level message. The process keeps running.
#[macro_export]
macro_rules! fatal {
    ($entry:expr, $($arg:tt)+) => {
        $crate::log!($entry, $crate::Severity::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Instance, Severity, Value};
    use crate::handlers::MemoryHandler;

    fn setup() -> (Instance, MemoryHandler) {
        let handler = MemoryHandler::new();
        let logger = Instance::builder()
            .min_severity(Severity::Trace)
            .handler(handler.clone())
            .build();
        (logger, handler)
    }

    #[test]
    fn test_log_macro() {
        let (logger, handler) = setup();
        log!(logger.context("t"), Severity::Warn, "Formatted: {}", 42);

        let records = handler.records();
        assert_eq!(records[0].severity, Some(Severity::Warn));
        assert_eq!(records[0].message.parts(), &[Value::from("Formatted: 42")]);
    }

    #[test]
    fn test_severity_macros() {
        let (logger, handler) = setup();
        trace!(logger.context("t"), "Trace {}", 1);
        debug!(logger.context("t"), "Debug {}", 2);
        info!(logger.context("t"), "Info {}", 3);
        warn!(logger.context("t"), "Warn {}", 4);
        error!(logger.context("t"), "Error {}", 5);
        fatal!(logger.context("t"), "Fatal {}", 6);

        let records = handler.records();
        let severities: Vec<_> = records.iter().filter_map(|r| r.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Trace,
                Severity::Debug,
                Severity::Info,
                Severity::Warn,
                Severity::Error,
                Severity::Fatal
            ]
        );
        assert_eq!(records[5].message.to_string(), "Fatal 6");
    }

    #[test]
    fn test_macro_on_labelled_entry() {
        let (logger, handler) = setup();
        info!(logger.context("t").label("k", "v"), "plain");

        let records = handler.records();
        assert_eq!(records[0].labels.get("k"), Some("v"));
        assert_eq!(records[0].message.to_string(), "plain");
    }
}
