use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for the operations that matter operationally:
/// plan regenerations, task mutations and the advice boundary.
/// All counters are atomic for thread-safety.
#[derive(Clone, Default)]
pub struct Metrics {
    /// Advice call latency in milliseconds (sum)
    pub advice_latency_ms: Arc<AtomicU64>,
    /// Advice calls that degraded to the fallback text
    pub advice_fallback_count: Arc<AtomicU64>,
    /// Advice cache hit count
    pub cache_hit_count: Arc<AtomicU64>,
    /// Advice cache miss count
    pub cache_miss_count: Arc<AtomicU64>,
    /// Weekly plans generated
    pub plans_generated: Arc<AtomicU64>,
    /// Task status updates applied
    pub task_updates: Arc<AtomicU64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record advice call latency
    pub fn record_advice_latency(&self, ms: u64) {
        self.advice_latency_ms.fetch_add(ms, Ordering::Relaxed);
    }

    /// Record an advice fallback
    pub fn record_advice_fallback(&self) {
        self.advice_fallback_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Record cache hit
    pub fn record_cache_hit(&self) {
        self.cache_hit_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Record cache miss
    pub fn record_cache_miss(&self) {
        self.cache_miss_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a plan generation
    pub fn record_plan_generated(&self) {
        self.plans_generated.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a task status update
    pub fn record_task_update(&self) {
        self.task_updates.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot all counters for display or logging
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            advice_latency_ms: self.advice_latency_ms.load(Ordering::Relaxed),
            advice_fallback_count: self.advice_fallback_count.load(Ordering::Relaxed),
            cache_hit_count: self.cache_hit_count.load(Ordering::Relaxed),
            cache_miss_count: self.cache_miss_count.load(Ordering::Relaxed),
            plans_generated: self.plans_generated.load(Ordering::Relaxed),
            task_updates: self.task_updates.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy)]
pub struct MetricsSnapshot {
    pub advice_latency_ms: u64,
    pub advice_fallback_count: u64,
    pub cache_hit_count: u64,
    pub cache_miss_count: u64,
    pub plans_generated: u64,
    pub task_updates: u64,
}
