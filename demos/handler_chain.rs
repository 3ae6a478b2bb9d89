//! Handler chain example
//!
//! Demonstrates bubbling, the error sink and building a logger from JSON.
//!
//! Run with: cargo run --example handler_chain

use rust_chain_logger::prelude::*;
use std::sync::Arc;

const CONFIG: &str = r#"{
    "name": "configured",
    "level": "DEBUG",
    "handlers": [
        { "type": "console", "level": "NOTICE", "target": "stderr" },
        { "type": "file", "path": "configured.log", "level": "DEBUG",
          "formatter": { "kind": "json" } }
    ]
}"#;

fn main() -> Result<()> {
    println!("=== Rust Chain Logger - Handler Chain Example ===\n");

    // Critical records stop at the first handler; everything else bubbles on
    println!("1. Non-bubbling handler at the front of the chain:");
    let logger = Logger::new("chain", Level::Debug);
    logger.push_handler(ConsoleHandler::new(Level::Debug).with_colors(false));
    logger.push_handler(
        ConsoleHandler::new(Level::Critical)
            .with_target(ConsoleTarget::Stderr)
            .with_bubble(false),
    );
    logger.info("printed once, by the stdout handler");
    logger.crit("printed once, by the stderr handler");

    // Failing handlers are reported to the sink and the walk goes on
    println!("\n2. Custom error sink:");
    let sink: ErrorSink = Arc::new(|channel, err| {
        eprintln!("[sink] channel {} reported: {}", channel, err);
    });
    logger.set_error_sink(sink);
    logger.push_handler(FileHandler::new("no-such-dir/app.log", Level::Debug));
    logger.warn("the file handler fails, the console handlers still run");

    println!("\n3. Logger built from JSON configuration:");
    let configured = LoggerConfig::from_json(CONFIG)?.build()?;
    configured.debug("only in configured.log");
    configured.notice("in configured.log and on stderr");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
