//! Basic logger usage example
//!
//! Demonstrates console logging at every level and runtime threshold changes.
//!
//! Run with: cargo run --example basic_usage

use rust_chain_logger::prelude::*;
use rust_chain_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust Chain Logger - Basic Usage Example ===\n");

    // The default logger installs a colored console handler on first use
    println!("1. Default logger:");
    rust_chain_logger::info("hello from the default logger");

    // A named channel with its own console handler
    let console = std::sync::Arc::new(ConsoleHandler::new(Level::Debug));
    let logger = Logger::new("basic", Level::Debug);
    logger.push_shared(console.clone());

    println!("\n2. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.notice("This is a notice message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.crit("This is a critical message");
    logger.alert("This is an alert message");
    logger.emerg("This is an emergency message");

    println!("\n3. Raising the handler threshold to WARNING:");
    console.set_level(Level::Warning);
    logger.debug("Debug message (hidden)");
    info!(logger, "Info message {} (hidden)", 1);
    warn!(logger, "Warning message {} (visible)", 2);

    let metrics = logger.metrics();
    println!(
        "\n   dispatched: {}, skipped: {}",
        metrics.records_dispatched(),
        metrics.records_skipped()
    );

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
