//! Logger metrics for observability
//!
//! Counts delivered events and the failures the sink absorbs instead of
//! returning, so missing history can be noticed without reading stderr.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_routed_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_logged();
/// metrics.record_unsaved();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.unsaved_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Events that passed through the sink
    total_logged: AtomicU64,

    /// Severity-route appends that failed and were reported on the console
    unsaved_count: AtomicU64,

    /// Main log appends that failed and were returned to the caller
    main_log_failures: AtomicU64,

    /// Panics the exception bridge could not record
    bridge_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            unsaved_count: AtomicU64::new(0),
            main_log_failures: AtomicU64::new(0),
            bridge_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn unsaved_count(&self) -> u64 {
        self.unsaved_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn main_log_failures(&self) -> u64 {
        self.main_log_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bridge_failures(&self) -> u64 {
        self.bridge_failures.load(Ordering::Relaxed)
    }

    /// Record an event handled by the sink. Returns the previous value.
    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_unsaved(&self) -> u64 {
        self.unsaved_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_main_log_failure(&self) -> u64 {
        self.main_log_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_bridge_failure(&self) -> u64 {
        self.bridge_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of handled events that lost at least one file destination,
    /// as a percentage (0.0 - 100.0)
    pub fn loss_rate(&self) -> f64 {
        let total = self.total_logged() as f64;
        if total == 0.0 {
            0.0
        } else {
            let lost = (self.unsaved_count() + self.main_log_failures()) as f64;
            (lost / total).min(1.0) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.unsaved_count.store(0, Ordering::Relaxed);
        self.main_log_failures.store(0, Ordering::Relaxed);
        self.bridge_failures.store(0, Ordering::Relaxed);
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
            total_logged: AtomicU64::new(self.total_logged()),
            unsaved_count: AtomicU64::new(self.unsaved_count()),
            main_log_failures: AtomicU64::new(self.main_log_failures()),
            bridge_failures: AtomicU64::new(self.bridge_failures()),
        }
    }
}
