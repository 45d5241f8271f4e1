//! Bounded cache from a consensus checkpoint to the material needed to verify attestation
//! signatures against it: fork, genesis root, seed, active validator indices and their
//! public keys.

pub mod cache;
pub mod checkpoint_info;
pub mod config;
pub mod errors;
pub mod hasher;
pub mod metrics;

pub use cache::CheckpointInfoCache;
pub use checkpoint_info::CheckpointInfo;
pub use config::{CHECKPOINT_INFO_CACHE_SIZE, CheckpointInfoCacheConfig};
pub use errors::CheckpointInfoCacheError;
pub use hasher::{CheckpointHasher, TreeHashCheckpointHasher};
pub use metrics::{CacheMetrics, PrometheusCacheMetrics};
