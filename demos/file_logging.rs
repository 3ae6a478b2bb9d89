//! File logging example
//!
//! Demonstrates logging to the console, a plain file and a daily rotating file
//! at the same time.
//!
//! Run with: cargo run --example file_logging

use rust_chain_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Chain Logger - File Logging Example ===\n");

    let rotating = RotatingFileHandler::new("application.log", Level::Info);
    let today = rotating.filename();

    let logger = Logger::builder()
        .name("app")
        .handler(ConsoleHandler::new(Level::Debug))
        .handler(FileHandler::new("errors.log", Level::Error))
        .handler(rotating)
        .build();

    println!("1. Logging to console and files:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.warn("Item 3 took longer than expected");
        }
    }
    logger.info("All operations completed");

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check '{}' and 'errors.log' for the file output", today.display());

    Ok(())
}
