use std::fmt::Debug;

use alloy_primitives::B256;
use ream_consensus_misc::checkpoint::Checkpoint;
use tree_hash::TreeHash;

use crate::errors::CheckpointInfoCacheError;

/// Derives the fixed-size cache key for a checkpoint.
///
/// Equal checkpoints must produce equal keys, and checkpoints differing in epoch or root must
/// not collide in practice.
pub trait CheckpointHasher: Debug + Send + Sync {
    fn hash_checkpoint(&self, checkpoint: &Checkpoint) -> Result<B256, CheckpointInfoCacheError>;
}

/// Keys checkpoints by their SSZ ``hash_tree_root``.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeHashCheckpointHasher;

impl CheckpointHasher for TreeHashCheckpointHasher {
    fn hash_checkpoint(&self, checkpoint: &Checkpoint) -> Result<B256, CheckpointInfoCacheError> {
        Ok(checkpoint.tree_hash_root())
    }
}
