use std::{num::NonZeroUsize, sync::Arc};

use alloy_primitives::B256;
use lru::LruCache;
use parking_lot::RwLock;
use ream_bls::PubKey;
use ream_consensus_misc::{checkpoint::Checkpoint, fork::Fork};
use tracing::{debug, trace};

use crate::{
    checkpoint_info::CheckpointInfo,
    config::CheckpointInfoCacheConfig,
    errors::CheckpointInfoCacheError,
    hasher::{CheckpointHasher, TreeHashCheckpointHasher},
    metrics::CacheMetrics,
};

/// LRU cache of [`CheckpointInfo`] keyed by the hash of the checkpoint.
///
/// `get` and `put` both reorder the LRU list and take the write lock. Inspection methods that
/// leave recency untouched take the read lock.
#[derive(Debug)]
pub struct CheckpointInfoCache<H = TreeHashCheckpointHasher> {
    cache: RwLock<LruCache<B256, Arc<CheckpointInfo>>>,
    hasher: H,
    metrics: Arc<dyn CacheMetrics>,
}

impl CheckpointInfoCache {
    pub fn new(metrics: Arc<dyn CacheMetrics>) -> Self {
        Self::from_config(&CheckpointInfoCacheConfig::default(), metrics)
    }

    /// Panics if `config.capacity` is zero.
    pub fn from_config(
        config: &CheckpointInfoCacheConfig,
        metrics: Arc<dyn CacheMetrics>,
    ) -> Self {
        Self::with_hasher(config, TreeHashCheckpointHasher, metrics)
    }
}

impl<H: CheckpointHasher> CheckpointInfoCache<H> {
    /// Panics if `config.capacity` is zero.
    pub fn with_hasher(
        config: &CheckpointInfoCacheConfig,
        hasher: H,
        metrics: Arc<dyn CacheMetrics>,
    ) -> Self {
        Self {
            cache: RwLock::new(LruCache::new(
                NonZeroUsize::new(config.capacity).expect("Invalid cache size"),
            )),
            hasher,
            metrics,
        }
    }

    /// Fetch the info stored for `checkpoint`, marking it as most recently used.
    ///
    /// The returned handle shares the cached record; nothing is copied.
    pub fn get(
        &self,
        checkpoint: &Checkpoint,
    ) -> Result<Option<Arc<CheckpointInfo>>, CheckpointInfoCacheError> {
        let key = self.hasher.hash_checkpoint(checkpoint)?;

        let mut cache = self.cache.write();
        match cache.get(&key) {
            Some(info) => {
                self.metrics.record_hit();
                trace!(
                    epoch = checkpoint.epoch,
                    root = ?checkpoint.root,
                    "Checkpoint info cache hit"
                );
                Ok(Some(info.clone()))
            }
            None => {
                self.metrics.record_miss();
                trace!(
                    epoch = checkpoint.epoch,
                    root = ?checkpoint.root,
                    "Checkpoint info cache miss"
                );
                Ok(None)
            }
        }
    }

    /// Store the info for `checkpoint`, replacing any previous entry. When the cache is full
    /// and `checkpoint` is new, the least recently used entry is evicted.
    pub fn put(
        &self,
        checkpoint: &Checkpoint,
        fork: Fork,
        genesis_root: B256,
        seed: B256,
        active_indices: Vec<u64>,
        pubkeys: Vec<PubKey>,
    ) -> Result<(), CheckpointInfoCacheError> {
        let key = self.hasher.hash_checkpoint(checkpoint)?;
        let info = Arc::new(CheckpointInfo::new(fork, genesis_root, seed, active_indices, pubkeys)?);

        let mut cache = self.cache.write();
        if let Some((evicted_key, _)) = cache.push(key, info)
            && evicted_key != key
        {
            debug!(
                ?evicted_key,
                capacity = cache.cap().get(),
                "Evicted checkpoint info from cache"
            );
        }

        Ok(())
    }

    /// Whether `checkpoint` is cached. Does not count as a use and does not touch the metrics.
    pub fn contains(&self, checkpoint: &Checkpoint) -> Result<bool, CheckpointInfoCacheError> {
        let key = self.hasher.hash_checkpoint(checkpoint)?;
        Ok(self.cache.read().contains(&key))
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.read().cap().get()
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::aliases::B32;
    use rstest::rstest;
    use tracing_test::traced_test;

    use super::*;
    use crate::{config::CHECKPOINT_INFO_CACHE_SIZE, metrics::PrometheusCacheMetrics};

    fn checkpoint(epoch: u64) -> Checkpoint {
        Checkpoint {
            epoch,
            root: B256::left_padding_from(&epoch.to_be_bytes()),
        }
    }

    fn fork() -> Fork {
        Fork {
            previous_version: B32::from([1, 0, 0, 0]),
            current_version: B32::from([2, 0, 0, 0]),
            epoch: 10,
        }
    }

    fn new_cache(capacity: usize) -> (CheckpointInfoCache, Arc<PrometheusCacheMetrics>) {
        let metrics = Arc::new(PrometheusCacheMetrics::unregistered());
        let cache = CheckpointInfoCache::from_config(
            &CheckpointInfoCacheConfig { capacity },
            metrics.clone(),
        );
        (cache, metrics)
    }

    fn put_epoch(cache: &CheckpointInfoCache, epoch: u64) -> anyhow::Result<()> {
        cache.put(
            &checkpoint(epoch),
            fork(),
            B256::repeat_byte(0x99),
            B256::left_padding_from(&(epoch * 7).to_be_bytes()),
            vec![epoch, epoch + 1],
            vec![PubKey::from([epoch as u8; 48]), PubKey::from([epoch as u8 + 1; 48])],
        )?;
        Ok(())
    }

    #[derive(Debug)]
    struct FailingHasher;

    impl CheckpointHasher for FailingHasher {
        fn hash_checkpoint(
            &self,
            _checkpoint: &Checkpoint,
        ) -> Result<B256, CheckpointInfoCacheError> {
            Err(CheckpointInfoCacheError::Hashing("unsupported checkpoint".to_string()))
        }
    }

    #[test]
    fn test_new_uses_default_capacity() {
        let cache = CheckpointInfoCache::new(Arc::new(PrometheusCacheMetrics::unregistered()));
        assert_eq!(cache.capacity(), CHECKPOINT_INFO_CACHE_SIZE);
        assert!(cache.is_empty());
    }

    #[test]
    #[should_panic(expected = "Invalid cache size")]
    fn test_zero_capacity_panics() {
        new_cache(0);
    }

    #[test]
    fn test_put_then_get_returns_equal_info() -> anyhow::Result<()> {
        let (cache, _) = new_cache(CHECKPOINT_INFO_CACHE_SIZE);
        let pubkeys = vec![PubKey::from([0xa1; 48]), PubKey::from([0xb2; 48])];

        cache.put(
            &checkpoint(5),
            fork(),
            B256::repeat_byte(0x01),
            B256::repeat_byte(0x02),
            vec![12, 3],
            pubkeys.clone(),
        )?;

        let info = cache.get(&checkpoint(5))?.expect("info was just inserted");
        let expected = CheckpointInfo::new(
            fork(),
            B256::repeat_byte(0x01),
            B256::repeat_byte(0x02),
            vec![12, 3],
            pubkeys,
        )?;
        assert_eq!(*info, expected);
        Ok(())
    }

    #[test]
    fn test_get_shares_the_stored_record() -> anyhow::Result<()> {
        let (cache, _) = new_cache(CHECKPOINT_INFO_CACHE_SIZE);
        put_epoch(&cache, 1)?;

        let first = cache.get(&checkpoint(1))?.expect("cached");
        let second = cache.get(&checkpoint(1))?.expect("cached");
        assert!(Arc::ptr_eq(&first, &second));
        Ok(())
    }

    #[test]
    fn test_miss_on_empty_cache() -> anyhow::Result<()> {
        let (cache, metrics) = new_cache(CHECKPOINT_INFO_CACHE_SIZE);

        assert!(cache.get(&checkpoint(1))?.is_none());
        assert_eq!(metrics.misses(), 1);
        assert_eq!(metrics.hits(), 0);
        Ok(())
    }

    #[test]
    fn test_each_get_counts_one_hit() -> anyhow::Result<()> {
        let (cache, metrics) = new_cache(CHECKPOINT_INFO_CACHE_SIZE);
        put_epoch(&cache, 4)?;

        for _ in 0..5 {
            assert!(cache.get(&checkpoint(4))?.is_some());
        }
        assert_eq!(metrics.hits(), 5);
        assert_eq!(metrics.misses(), 0);
        Ok(())
    }

    #[test]
    fn test_put_does_not_touch_metrics() -> anyhow::Result<()> {
        let (cache, metrics) = new_cache(2);
        for epoch in 0..4 {
            put_epoch(&cache, epoch)?;
        }

        assert_eq!((metrics.hits(), metrics.misses()), (0, 0));
        Ok(())
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(CHECKPOINT_INFO_CACHE_SIZE)]
    fn test_capacity_bound_evicts_first_inserted(#[case] capacity: usize) -> anyhow::Result<()> {
        let (cache, _) = new_cache(capacity);
        for epoch in 0..=capacity as u64 {
            put_epoch(&cache, epoch)?;
        }

        assert_eq!(cache.len(), capacity);
        assert!(cache.get(&checkpoint(0))?.is_none());
        for epoch in 1..=capacity as u64 {
            assert!(cache.contains(&checkpoint(epoch))?);
        }
        Ok(())
    }

    #[test]
    fn test_get_refreshes_recency() -> anyhow::Result<()> {
        let (cache, _) = new_cache(2);
        let (a, b, c) = (1, 2, 3);

        put_epoch(&cache, a)?;
        put_epoch(&cache, b)?;
        assert!(cache.get(&checkpoint(a))?.is_some());
        put_epoch(&cache, c)?;

        assert!(cache.get(&checkpoint(a))?.is_some());
        assert!(cache.get(&checkpoint(b))?.is_none());
        assert!(cache.get(&checkpoint(c))?.is_some());
        Ok(())
    }

    #[test]
    fn test_contains_does_not_refresh_recency() -> anyhow::Result<()> {
        let (cache, metrics) = new_cache(2);

        put_epoch(&cache, 1)?;
        put_epoch(&cache, 2)?;
        assert!(cache.contains(&checkpoint(1))?);
        put_epoch(&cache, 3)?;

        assert!(!cache.contains(&checkpoint(1))?);
        assert!(cache.contains(&checkpoint(2))?);
        assert_eq!((metrics.hits(), metrics.misses()), (0, 0));
        Ok(())
    }

    #[test]
    fn test_overwrite_replaces_without_eviction() -> anyhow::Result<()> {
        let (cache, _) = new_cache(2);
        put_epoch(&cache, 1)?;
        put_epoch(&cache, 2)?;

        cache.put(
            &checkpoint(2),
            fork(),
            B256::ZERO,
            B256::repeat_byte(0xee),
            vec![42],
            vec![PubKey::from([42; 48])],
        )?;

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&checkpoint(1))?);
        let info = cache.get(&checkpoint(2))?.expect("overwritten entry is cached");
        assert_eq!(info.seed(), B256::repeat_byte(0xee));
        assert_eq!(info.active_indices(), &[42]);
        Ok(())
    }

    #[test]
    fn test_distinct_checkpoints_do_not_alias() -> anyhow::Result<()> {
        let (cache, _) = new_cache(CHECKPOINT_INFO_CACHE_SIZE);
        let a = checkpoint(8);
        let same_epoch = Checkpoint {
            root: B256::repeat_byte(0xff),
            ..a
        };
        let same_root = Checkpoint { epoch: 9, ..a };

        put_epoch(&cache, 8)?;

        assert!(cache.get(&a)?.is_some());
        assert!(cache.get(&same_epoch)?.is_none());
        assert!(cache.get(&same_root)?.is_none());
        Ok(())
    }

    #[test]
    fn test_put_rejects_misaligned_input() -> anyhow::Result<()> {
        let (cache, _) = new_cache(CHECKPOINT_INFO_CACHE_SIZE);

        let result = cache.put(
            &checkpoint(1),
            fork(),
            B256::ZERO,
            B256::ZERO,
            vec![1, 2, 3],
            vec![PubKey::from([1; 48])],
        );

        assert_eq!(
            result,
            Err(CheckpointInfoCacheError::LengthMismatch {
                indices: 3,
                pubkeys: 1
            })
        );
        assert!(cache.is_empty());
        Ok(())
    }

    #[test]
    fn test_hashing_failure_leaves_cache_untouched() {
        let metrics = Arc::new(PrometheusCacheMetrics::unregistered());
        let cache = CheckpointInfoCache::with_hasher(
            &CheckpointInfoCacheConfig::default(),
            FailingHasher,
            metrics.clone(),
        );
        let expected = Err(CheckpointInfoCacheError::Hashing(
            "unsupported checkpoint".to_string(),
        ));

        assert_eq!(
            cache.put(&checkpoint(1), fork(), B256::ZERO, B256::ZERO, vec![], vec![]),
            expected
        );
        assert_eq!(cache.get(&checkpoint(1)).map(|_| ()), expected);
        assert_eq!(cache.contains(&checkpoint(1)).map(|_| ()), expected);
        assert!(cache.is_empty());
        assert_eq!((metrics.hits(), metrics.misses()), (0, 0));
    }

    #[test]
    #[traced_test]
    fn test_eviction_is_logged() -> anyhow::Result<()> {
        let (cache, _) = new_cache(1);
        put_epoch(&cache, 1)?;
        put_epoch(&cache, 1)?;
        assert!(!logs_contain("Evicted checkpoint info from cache"));

        put_epoch(&cache, 2)?;
        assert!(logs_contain("Evicted checkpoint info from cache"));
        Ok(())
    }
}
