//! Criterion benchmarks for labelled_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use labelled_logger::core::{Entry, Handler, Result};
use labelled_logger::prelude::*;
use std::sync::Arc;

/// Discards entries so only the core path is measured
struct NullHandler;

impl Handler for NullHandler {
    fn log(&self, entry: &Entry<'_>) -> Result<()> {
        black_box(entry);
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Entry Creation Benchmarks
// ============================================================================

fn bench_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("context");
    group.throughput(Throughput::Elements(1));

    let empty = Instance::with_handler(NullHandler);
    group.bench_function("no_labels", |b| {
        b.iter(|| black_box(empty.context(black_box("bench"))));
    });

    let labelled = Instance::with_handler(NullHandler);
    for i in 0..8 {
        labelled.set_label(format!("key{}", i), i);
    }
    group.bench_function("eight_labels", |b| {
        b.iter(|| black_box(labelled.context(black_box("bench"))));
    });

    let dynamic = Instance::with_handler(NullHandler);
    dynamic.set_dynamic_label("pid", || std::process::id().to_string());
    group.bench_function("dynamic_label", |b| {
        b.iter(|| black_box(dynamic.context(black_box("bench"))));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let logger = Instance::with_handler(NullHandler);
    logger.set_label("service", "bench");

    group.bench_function("info_dispatched", |b| {
        b.iter(|| logger.context("bench").info(black_box("Info message")));
    });

    group.bench_function("debug_filtered", |b| {
        b.iter(|| logger.context("bench").debug(black_box("Debug message")));
    });

    group.bench_function("info_fmt_with_label", |b| {
        b.iter(|| {
            logger
                .context("bench")
                .label("order", 42)
                .info_fmt(format_args!("Processed {} items", black_box(100)))
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let logger = Instance::with_handler(NullHandler);
    logger.set_label("service", "checkout");
    let mut entry = logger.context("payment").label("order", 42);
    entry.error("card declined");

    for (name, format) in [
        ("text", OutputFormat::Text),
        ("json", OutputFormat::Json),
        ("logfmt", OutputFormat::Logfmt),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(format.format(&entry, entry.labels(), &TimestampFormat::Iso8601)));
        });
    }

    group.finish();
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn bench_concurrent(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");
    group.throughput(Throughput::Elements(4 * 100));

    let logger = Arc::new(Instance::with_handler(NullHandler));
    logger.set_label("service", "bench");

    group.bench_function("four_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            logger.set_label("last", i);
                            logger.context("bench").label("thread", t).info("message");
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_context,
    bench_dispatch,
    bench_formatting,
    bench_concurrent
);
criterion_main!(benches);
