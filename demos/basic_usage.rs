//! Basic logger usage example
//!
//! Demonstrates contexts, labels, severities and the console handler.
//!
//! Run with: cargo run --example basic_usage

use labelled_logger::prelude::*;
use labelled_logger::warn;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Labelled Logger - Basic Usage Example ===\n");

    let logger = Instance::builder()
        .min_severity(Severity::Trace)
        .handler(ConsoleHandler::new().with_ambient_label("host", "demo-1"))
        .label("service", "checkout")
        .build();

    println!("1. Logging at different severities:");
    logger.context("demo").trace("This is a trace message");
    logger.context("demo").debug("This is a debug message");
    logger.context("demo").info("This is an info message");
    logger.context("demo").warn("This is a warning message");
    logger.context("demo").error("This is an error message");
    logger.context("demo").fatal("This is a fatal message");

    println!("\n2. Entry labels and formatted messages:");
    logger
        .context("payment")
        .label("order", 42)
        .error("card declined");
    warn!(logger.context("payment").label("order", 43), "Retry {} of {}", 1, 3);

    println!("\n3. Dynamic labels:");
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);
    logger.set_dynamic_label("request", move || {
        (counter.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    });
    for _ in 0..3 {
        logger.context("http").info("Request handled");
    }

    println!("\n4. Raising the threshold to WARN:");
    logger.set_min_severity("WARN")?;
    logger.context("demo").info("Info message (hidden)");
    logger.context("demo").warn("Warning message (visible)");

    if let Err(e) = logger.set_min_severity("verbose") {
        println!("   Rejected: {}", e);
    }

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
