//! Logger metrics for observability
//!
//! Counters describing how records move through a logger's handler chain.

use std::sync::atomic::{AtomicU64, Ordering};

/// Dispatch statistics for one [`Logger`](super::Logger)
///
/// # Example
///
/// ```
/// use rust_chain_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_skipped();
///
/// assert_eq!(metrics.records_dispatched(), 1);
/// assert_eq!(metrics.records_skipped(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records built and walked through the chain
    records_dispatched: AtomicU64,

    /// Log calls dropped because no handler accepted the level
    records_skipped: AtomicU64,

    /// Individual `Handler::handle` calls
    handler_invocations: AtomicU64,

    /// Errors reported to the error sink
    handler_errors: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_dispatched: AtomicU64::new(0),
            records_skipped: AtomicU64::new(0),
            handler_invocations: AtomicU64::new(0),
            handler_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_dispatched(&self) -> u64 {
        self.records_dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_skipped(&self) -> u64 {
        self.records_skipped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn handler_invocations(&self) -> u64 {
        self.handler_invocations.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn handler_errors(&self) -> u64 {
        self.handler_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.records_dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_skipped(&self) -> u64 {
        self.records_skipped.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_invocation(&self) -> u64 {
        self.handler_invocations.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_error(&self) -> u64 {
        self.handler_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of log calls that were dropped by the short-circuit (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been logged.
    pub fn skip_rate(&self) -> f64 {
        let dispatched = self.records_dispatched();
        let skipped = self.records_skipped();
        let total = dispatched + skipped;

        if total == 0 {
            0.0
        } else {
            (skipped as f64 / total as f64) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.records_dispatched.store(0, Ordering::Relaxed);
        self.records_skipped.store(0, Ordering::Relaxed);
        self.handler_invocations.store(0, Ordering::Relaxed);
        self.handler_errors.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = LoggerMetrics::new();
        metrics.record_dispatched();
        metrics.record_invocation();
        metrics.record_invocation();
        metrics.record_error();

        assert_eq!(metrics.records_dispatched(), 1);
        assert_eq!(metrics.handler_invocations(), 2);
        assert_eq!(metrics.handler_errors(), 1);
        assert_eq!(metrics.records_skipped(), 0);
    }

    #[test]
    fn test_skip_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.skip_rate(), 0.0);

        for _ in 0..3 {
            metrics.record_dispatched();
        }
        metrics.record_skipped();

        let rate = metrics.skip_rate();
        assert!((24.9..=25.1).contains(&rate), "Skip rate was {}", rate);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_dispatched();
        metrics.record_error();
        metrics.reset();
        assert_eq!(metrics.records_dispatched(), 0);
        assert_eq!(metrics.handler_errors(), 0);
    }
}
