//! Dispatch counters for observability

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one dispatcher
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Requests handed to a background task
    dispatched_count: AtomicU64,
    /// Requests the server accepted with 2xx
    published_count: AtomicU64,
    /// Network failures and non-2xx answers
    failed_count: AtomicU64,
    /// Publishes rejected before any I/O
    rejected_count: AtomicU64,
}

impl DispatchMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatched_count(&self) -> u64 {
        self.dispatched_count.load(Ordering::Relaxed)
    }

    pub fn inc_dispatched_count(&self) {
        self.dispatched_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn published_count(&self) -> u64 {
        self.published_count.load(Ordering::Relaxed)
    }

    pub fn inc_published_count(&self) {
        self.published_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    pub fn inc_failed_count(&self) {
        self.failed_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn rejected_count(&self) -> u64 {
        self.rejected_count.load(Ordering::Relaxed)
    }

    pub fn inc_rejected_count(&self) {
        self.rejected_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            dispatched: self.dispatched_count(),
            published: self.published_count(),
            failed: self.failed_count(),
            rejected: self.rejected_count(),
        }
    }
}

/// Snapshot of dispatch metrics (for reporting)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub dispatched: u64,
    pub published: u64,
    pub failed: u64,
    pub rejected: u64,
}

impl MetricsSnapshot {
    /// Dispatched requests that have not finished yet
    pub fn pending(&self) -> u64 {
        self.dispatched
            .saturating_sub(self.published)
            .saturating_sub(self.failed)
    }
}
