//! Fallback metrics and observability module.
//!
//! Counts how often localized titles and translations were served directly
//! versus through a fallback step. Fallbacks are never errors, so these
//! counters are the aggregate view of how much content is missing.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Process-wide fallback counters.
#[derive(Debug, Default)]
pub struct FallbackMetrics {
    /// CSV title found for the requested locale
    title_hits: AtomicUsize,

    /// CSV title served from the English row instead
    title_fallbacks: AtomicUsize,

    /// No CSV title for the path at all
    title_misses: AtomicUsize,

    /// Translation found in the requested locale
    translation_hits: AtomicUsize,

    /// Translation served from English or synthesized
    translation_fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<FallbackMetrics> = OnceLock::new();

impl FallbackMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global metrics instance.
    pub fn global() -> &'static FallbackMetrics {
        METRICS.get_or_init(FallbackMetrics::new)
    }

    pub fn record_title_hit(&self) {
        self.title_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_title_fallback(&self) {
        self.title_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_title_miss(&self) {
        self.title_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translation_hit(&self) {
        self.translation_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translation_fallback(&self) {
        self.translation_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn title_hits(&self) -> usize {
        self.title_hits.load(Ordering::Relaxed)
    }

    pub fn title_fallbacks(&self) -> usize {
        self.title_fallbacks.load(Ordering::Relaxed)
    }

    pub fn title_misses(&self) -> usize {
        self.title_misses.load(Ordering::Relaxed)
    }

    pub fn translation_hits(&self) -> usize {
        self.translation_hits.load(Ordering::Relaxed)
    }

    pub fn translation_fallbacks(&self) -> usize {
        self.translation_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let title_hits = self.title_hits();
        let title_fallbacks = self.title_fallbacks();
        let title_misses = self.title_misses();
        let title_lookups = title_hits + title_fallbacks + title_misses;
        let title_coverage = percentage(title_hits, title_lookups);

        let translation_hits = self.translation_hits();
        let translation_fallbacks = self.translation_fallbacks();
        let translation_coverage =
            percentage(translation_hits, translation_hits + translation_fallbacks);

        MetricsReport {
            title_hits,
            title_fallbacks,
            title_misses,
            title_coverage,
            translation_hits,
            translation_fallbacks,
            translation_coverage,
        }
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Snapshot of the fallback counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub title_hits: usize,
    pub title_fallbacks: usize,
    pub title_misses: usize,

    /// Share of title lookups served in the requested locale (0-100)
    pub title_coverage: f64,

    pub translation_hits: usize,
    pub translation_fallbacks: usize,

    /// Share of translations served in the requested locale (0-100)
    pub translation_coverage: f64,
}
