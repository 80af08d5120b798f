//! Translation lookup metrics.
//!
//! Counts how often UI lookups were served directly, served from the default
//! language, or missed entirely.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Lookup counters. `global()` holds the process-wide instance.
pub struct TranslationMetrics {
    /// Total lookups
    lookups: AtomicUsize,

    /// Lookups answered by the default-language table
    fallbacks: AtomicUsize,

    /// Lookups that found nothing and returned the key
    misses: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// A fresh set of counters, independent of the global instance.
    pub fn new() -> Self {
        Self {
            lookups: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let fallbacks = self.fallbacks();
        let misses = self.misses();
        let rate = |n: usize| {
            if lookups > 0 {
                (n as f64 / lookups as f64) * 100.0
            } else {
                0.0
            }
        };

        MetricsReport {
            lookups,
            fallbacks,
            misses,
            fallback_rate: rate(fallbacks),
            miss_rate: rate(misses),
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Default for TranslationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Metrics report containing current lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub fallbacks: usize,
    pub misses: usize,

    /// Fallback rate as a percentage (0-100)
    pub fallback_rate: f64,

    /// Miss rate as a percentage (0-100)
    pub miss_rate: f64,
}

impl MetricsReport {
    /// Format the report as a human-readable string.
    pub fn format(&self) -> String {
        format!(
            "Translation lookups: {} ({} fallbacks, {:.1}%; {} misses, {:.1}%)",
            self.lookups, self.fallbacks, self.fallback_rate, self.misses, self.miss_rate
        )
    }
}
