//! Stress tests for concurrent use of a shared instance
//!
//! These tests verify:
//! - Label writers and entry creation can run concurrently
//! - Every entry sees a consistent, sorted label snapshot
//! - Filtering and dispatch counts hold under concurrent logging

use labelled_logger::core::{Entry, Handler, Result};
use labelled_logger::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Counts dispatched entries without keeping them
struct CountingHandler {
    count: AtomicUsize,
}

impl Handler for CountingHandler {
    fn log(&self, _entry: &Entry<'_>) -> Result<()> {
        self.count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

#[test]
fn test_concurrent_logging() {
    let handler = Arc::new(CountingHandler {
        count: AtomicUsize::new(0),
    });
    let logger = Arc::new(Instance::with_handler(Arc::clone(&handler)));

    let mut handles = vec![];
    for thread_id in 0..8 {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for i in 0..250 {
                let mut entry = logger.context("worker").label("thread", thread_id);
                if i % 2 == 0 {
                    entry.info_fmt(format_args!("Thread {} - Message {}", thread_id, i));
                } else {
                    entry.debug_fmt(format_args!("Thread {} - Message {}", thread_id, i));
                }
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(handler.count.load(Ordering::Relaxed), 8 * 125);
    assert_eq!(logger.metrics().dispatched(), 8 * 125);
    assert_eq!(logger.metrics().filtered(), 8 * 125);
}

#[test]
fn test_concurrent_label_writes_and_snapshots() {
    let handler = MemoryHandler::new();
    let logger = Arc::new(Instance::with_handler(handler.clone()));
    logger.set_label("service", "checkout");

    let writers: Vec<_> = (0..4)
        .map(|w| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..500 {
                    logger.set_label(format!("key{}", i % 16), format!("{}-{}", w, i));
                    if i % 50 == 0 {
                        logger.remove_label("key0");
                    }
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for _ in 0..500 {
                    logger.context("reader").info("tick");
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().expect("Thread panicked");
    }

    let records = handler.records();
    assert_eq!(records.len(), 4 * 500);
    for record in &records {
        let keys: Vec<_> = record.labels.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(keys, sorted, "labels must be unique and sorted");
        assert_eq!(record.labels.get("service"), Some("checkout"));
    }

    assert!(logger.labels().len() <= 17);
}

#[test]
fn test_concurrent_threshold_changes() {
    let handler = MemoryHandler::new();
    let logger = Arc::new(Instance::with_handler(handler.clone()));

    let toggler = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..1000 {
                let text = if i % 2 == 0 { "ERROR" } else { "TRACE" };
                logger.set_min_severity(text).expect("canonical text");
            }
        })
    };

    let emitter = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for _ in 0..1000 {
                logger.context("gate").fatal("always");
                logger.context("gate").trace("sometimes");
            }
        })
    };

    toggler.join().expect("Thread panicked");
    emitter.join().expect("Thread panicked");

    let records = handler.records();
    let fatal = records
        .iter()
        .filter(|r| r.severity == Some(Severity::Fatal))
        .count();
    assert_eq!(fatal, 1000);
    assert_eq!(
        logger.metrics().dispatched() + logger.metrics().filtered(),
        2000
    );
}

#[test]
fn test_dynamic_label_under_contention() {
    let handler = MemoryHandler::new();
    let logger = Arc::new(Instance::with_handler(handler.clone()));
    let counter = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&counter);
    logger.set_dynamic_label("seq", move || c.fetch_add(1, Ordering::SeqCst).to_string());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for _ in 0..100 {
                    logger.context("dyn").info("x");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let mut seen: Vec<usize> = handler
        .records()
        .iter()
        .map(|r| r.labels.get("seq").unwrap().parse().unwrap())
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..400).collect::<Vec<_>>());
}
