use std::fmt::{self, Debug};

use ream_metrics::{
    CHECKPOINT_INFO_CACHE_HIT, CHECKPOINT_INFO_CACHE_MISS, IntCounter,
    helpers::{create_unregistered_int_counter, inc_int_counter},
};

/// Sink for the cache's hit and miss counts. Only lookups are recorded.
pub trait CacheMetrics: Debug + Send + Sync {
    fn record_hit(&self);

    fn record_miss(&self);
}

#[derive(Clone)]
pub struct PrometheusCacheMetrics {
    hit: IntCounter,
    miss: IntCounter,
}

impl PrometheusCacheMetrics {
    pub fn new(hit: IntCounter, miss: IntCounter) -> Self {
        Self { hit, miss }
    }

    /// Counters owned by this instance only, not exported through the default registry.
    pub fn unregistered() -> Self {
        Self {
            hit: create_unregistered_int_counter(
                "check_point_info_cache_hit",
                "The number of check point info requests that are present in the cache.",
            ),
            miss: create_unregistered_int_counter(
                "check_point_info_cache_miss",
                "The number of check point info requests that aren't present in the cache.",
            ),
        }
    }

    pub fn hits(&self) -> u64 {
        self.hit.get()
    }

    pub fn misses(&self) -> u64 {
        self.miss.get()
    }
}

impl Default for PrometheusCacheMetrics {
    /// Process-wide counters registered on the default registry.
    fn default() -> Self {
        Self::new(
            CHECKPOINT_INFO_CACHE_HIT.clone(),
            CHECKPOINT_INFO_CACHE_MISS.clone(),
        )
    }
}

impl Debug for PrometheusCacheMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrometheusCacheMetrics")
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}

impl CacheMetrics for PrometheusCacheMetrics {
    fn record_hit(&self) {
        inc_int_counter(&self.hit);
    }

    fn record_miss(&self) {
        inc_int_counter(&self.miss);
    }
}
