//! Metrics registry
//!
//! Counters only, monotonic, reset on process start.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for the listing service.
///
/// Relaxed ordering throughout; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    property_searches: AtomicU64,
    property_lookups: AtomicU64,
    lookups_not_found: AtomicU64,
    properties_created: AtomicU64,
    properties_replaced: AtomicU64,
    validation_rejections: AtomicU64,
    space_searches: AtomicU64,
    stats_computed: AtomicU64,
    store_failures: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_property_searches(&self) {
        self.property_searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_property_lookups(&self) {
        self.property_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lookups_not_found(&self) {
        self.lookups_not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_properties_created(&self) {
        self.properties_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_properties_replaced(&self) {
        self.properties_replaced.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_validation_rejections(&self) {
        self.validation_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_space_searches(&self) {
        self.space_searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_stats_computed(&self) {
        self.stats_computed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_store_failures(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            property_searches: self.property_searches.load(Ordering::Relaxed),
            property_lookups: self.property_lookups.load(Ordering::Relaxed),
            lookups_not_found: self.lookups_not_found.load(Ordering::Relaxed),
            properties_created: self.properties_created.load(Ordering::Relaxed),
            properties_replaced: self.properties_replaced.load(Ordering::Relaxed),
            validation_rejections: self.validation_rejections.load(Ordering::Relaxed),
            space_searches: self.space_searches.load(Ordering::Relaxed),
            stats_computed: self.stats_computed.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of all counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub property_searches: u64,
    pub property_lookups: u64,
    pub lookups_not_found: u64,
    pub properties_created: u64,
    pub properties_replaced: u64,
    pub validation_rejections: u64,
    pub space_searches: u64,
    pub stats_computed: u64,
    pub store_failures: u64,
}
