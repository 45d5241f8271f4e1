use serde::{Deserialize, Serialize};

/// Max number of checkpoint infos kept. Reorgs and long finality delays mean attestations can
/// still target checkpoints several epochs old, so a short history is retained.
pub const CHECKPOINT_INFO_CACHE_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckpointInfoCacheConfig {
    pub capacity: usize,
}

impl Default for CheckpointInfoCacheConfig {
    fn default() -> Self {
        Self {
            capacity: CHECKPOINT_INFO_CACHE_SIZE,
        }
    }
}
