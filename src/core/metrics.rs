//! Logger metrics for observability
//!
//! Counters for entries dispatched to the handler, entries dropped by the
//! severity threshold, handler failures and dynamic label failures. These
//! are the out-of-band channel for problems that logging never reports to
//! its caller.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use labelled_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_handler_failure();
///
/// assert_eq!(metrics.dispatched(), 1);
/// assert_eq!(metrics.handler_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries handed to the handler, whether or not it succeeded
    dispatched: AtomicU64,

    /// Entries dropped because they were less severe than the threshold
    filtered: AtomicU64,

    /// Handler calls that returned an error or panicked
    handler_failures: AtomicU64,

    /// Dynamic label producers that panicked during a snapshot
    label_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            handler_failures: AtomicU64::new(0),
            label_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn handler_failures(&self) -> u64 {
        self.handler_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn label_failures(&self) -> u64 {
        self.label_failures.load(Ordering::Relaxed)
    }

    /// Returns the previous value
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_handler_failure(&self) -> u64 {
        self.handler_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_label_failure(&self) -> u64 {
        self.label_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Get handler failure rate as a percentage of dispatched entries (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been dispatched.
    pub fn failure_rate(&self) -> f64 {
        let dispatched = self.dispatched() as f64;
        if dispatched == 0.0 {
            0.0
        } else {
            (self.handler_failures() as f64 / dispatched) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.handler_failures.store(0, Ordering::Relaxed);
        self.label_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched()),
            filtered: AtomicU64::new(self.filtered()),
            handler_failures: AtomicU64::new(self.handler_failures()),
            label_failures: AtomicU64::new(self.label_failures()),
        }
    }
}
