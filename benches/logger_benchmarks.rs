//! Criterion benchmarks for rust_chain_logger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_chain_logger::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

/// Accepts everything and discards it, so dispatch cost is measured alone.
struct NullHandler(HandlerCore);

impl Handler for NullHandler {
    fn name(&self) -> &str {
        "null"
    }

    fn level(&self) -> Level {
        self.0.level()
    }

    fn handle(&self, record: &Record) -> Handled {
        self.0.process(record, |line| {
            black_box(line);
            Ok(())
        })
    }
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let filtered = Logger::new("bench", Level::Debug);
    filtered.push_handler(NullHandler(HandlerCore::new(Level::Error)));

    group.bench_function("short_circuit", |b| {
        b.iter(|| {
            filtered.add_record(Level::Debug, format_args!("skipped {}", black_box(42)));
        });
    });

    let accepting = Logger::new("bench", Level::Debug);
    accepting.push_handler(NullHandler(HandlerCore::new(Level::Debug)));

    group.bench_function("null_handler", |b| {
        b.iter(|| {
            accepting.add_record(Level::Info, format_args!("accepted {}", black_box(42)));
        });
    });

    group.finish();
}

fn bench_chain_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_length");
    group.throughput(Throughput::Elements(1));

    for len in [1usize, 4, 16] {
        let logger = Logger::new("bench", Level::Debug);
        for _ in 0..len {
            logger.push_handler(NullHandler(HandlerCore::new(Level::Debug)));
        }

        group.bench_with_input(BenchmarkId::from_parameter(len), &logger, |b, logger| {
            b.iter(|| logger.info(black_box("walk the chain")));
        });
    }

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let record = Record::new(Level::Warning, "disk usage at 91%", "storage");
    let line = LineFormatter::new();
    let json = JsonFormatter::new();

    group.bench_function("line", |b| {
        b.iter(|| black_box(line.format(black_box(&record))));
    });

    group.bench_function("json", |b| {
        b.iter(|| black_box(json.format(black_box(&record))));
    });

    group.finish();
}

// ============================================================================
// File Handler Benchmarks
// ============================================================================

fn bench_file_handler(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_handler");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let plain = Logger::new("bench", Level::Debug);
    plain.push_handler(FileHandler::new(temp_dir.path().join("plain.log"), Level::Debug));

    group.bench_function("append", |b| {
        b.iter(|| plain.info(black_box("file benchmark message")));
    });

    let rotating = Logger::new("bench", Level::Debug);
    rotating.push_handler(RotatingFileHandler::new(
        temp_dir.path().join("rotating.log"),
        Level::Debug,
    ));

    group.bench_function("rotating_append", |b| {
        b.iter(|| rotating.info(black_box("rotating benchmark message")));
    });

    group.finish();
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn bench_shared_logger(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_logger");

    let logger = Arc::new(Logger::new("bench", Level::Debug));
    logger.push_handler(NullHandler(HandlerCore::new(Level::Debug)));

    group.throughput(Throughput::Elements(400));
    group.bench_function("4_threads_x_100", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            logger.add_record(Level::Info, format_args!("message {}", i));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().expect("Thread panicked");
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_dispatch,
    bench_chain_length,
    bench_formatters,
    bench_file_handler,
    bench_shared_logger
);
criterion_main!(benches);
