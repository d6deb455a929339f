//! Global atomic counters for trustpipe observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (e.g. at the end of a run).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Lightweight atomic counters — no allocations, no locking.
pub struct Metrics {
    pipelines_completed: AtomicU64,
    pipelines_failed: AtomicU64,
    low_confidence_flags: AtomicU64,
    sink_write_errors: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            pipelines_completed: AtomicU64::new(0),
            pipelines_failed: AtomicU64::new(0),
            low_confidence_flags: AtomicU64::new(0),
            sink_write_errors: AtomicU64::new(0),
        }
    }

    /// Increment the pipelines-completed counter by one.
    pub fn inc_pipelines_completed(&self) {
        self.pipelines_completed.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "pipelines_completed", "counter incremented");
    }

    /// Increment the pipelines-failed counter by one.
    pub fn inc_pipelines_failed(&self) {
        self.pipelines_failed.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "pipelines_failed", "counter incremented");
    }

    /// Increment the low-confidence counter by one.
    pub fn inc_low_confidence_flags(&self) {
        self.low_confidence_flags.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "low_confidence_flags", "counter incremented");
    }

    /// Increment the sink-write-errors counter by one.
    pub fn inc_sink_write_errors(&self) {
        self.sink_write_errors.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "sink_write_errors", "counter incremented");
    }

    /// Emit all current counter values as a single `info!` event.
    ///
    /// Call this at natural boundaries (end of a run, daemon tick, etc.)
    /// rather than on every increment.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            pipelines_completed = self.pipelines_completed(),
            pipelines_failed = self.pipelines_failed(),
            low_confidence_flags = self.low_confidence_flags(),
            sink_write_errors = self.sink_write_errors(),
        );
    }

    /// Read the current pipelines-completed count.
    pub fn pipelines_completed(&self) -> u64 {
        self.pipelines_completed.load(Ordering::Relaxed)
    }

    /// Read the current pipelines-failed count.
    pub fn pipelines_failed(&self) -> u64 {
        self.pipelines_failed.load(Ordering::Relaxed)
    }

    /// Read the current low-confidence count.
    pub fn low_confidence_flags(&self) -> u64 {
        self.low_confidence_flags.load(Ordering::Relaxed)
    }

    /// Read the current sink-write-errors count.
    pub fn sink_write_errors(&self) -> u64 {
        self.sink_write_errors.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero (useful in tests).
    pub fn reset(&self) {
        self.pipelines_completed.store(0, Ordering::Relaxed);
        self.pipelines_failed.store(0, Ordering::Relaxed);
        self.low_confidence_flags.store(0, Ordering::Relaxed);
        self.sink_write_errors.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_increment() {
        let m = Metrics::new();
        assert_eq!(m.pipelines_completed(), 0);
        m.inc_pipelines_completed();
        m.inc_pipelines_completed();
        assert_eq!(m.pipelines_completed(), 2);

        m.inc_pipelines_failed();
        assert_eq!(m.pipelines_failed(), 1);

        m.inc_low_confidence_flags();
        m.inc_sink_write_errors();
        assert_eq!(m.low_confidence_flags(), 1);
        assert_eq!(m.sink_write_errors(), 1);
    }

    #[test]
    fn reset_zeroes_all() {
        let m = Metrics::new();
        m.inc_pipelines_completed();
        m.inc_pipelines_failed();
        m.inc_low_confidence_flags();
        m.inc_sink_write_errors();
        m.reset();
        assert_eq!(m.pipelines_completed(), 0);
        assert_eq!(m.pipelines_failed(), 0);
        assert_eq!(m.low_confidence_flags(), 0);
        assert_eq!(m.sink_write_errors(), 0);
    }
}
