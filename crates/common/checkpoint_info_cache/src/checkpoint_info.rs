use alloy_primitives::{B256, aliases::B32};
use ream_bls::PubKey;
use ream_consensus_misc::{
    constants::beacon::DOMAIN_BEACON_ATTESTER, fork::Fork, misc::compute_domain,
};

use crate::errors::CheckpointInfoCacheError;

/// Everything needed to verify an attestation signature for a checkpoint.
///
/// Immutable once built. The cache hands out shared `Arc` handles to the same record, so
/// fields are only reachable through accessors.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckpointInfo {
    fork: Fork,
    genesis_root: B256,
    seed: B256,
    active_indices: Vec<u64>,
    pubkeys: Vec<PubKey>,
}

impl CheckpointInfo {
    /// `pubkeys[i]` must be the key of validator `active_indices[i]`.
    pub fn new(
        fork: Fork,
        genesis_root: B256,
        seed: B256,
        active_indices: Vec<u64>,
        pubkeys: Vec<PubKey>,
    ) -> Result<Self, CheckpointInfoCacheError> {
        if active_indices.len() != pubkeys.len() {
            return Err(CheckpointInfoCacheError::LengthMismatch {
                indices: active_indices.len(),
                pubkeys: pubkeys.len(),
            });
        }

        Ok(Self {
            fork,
            genesis_root,
            seed,
            active_indices,
            pubkeys,
        })
    }

    pub fn fork(&self) -> &Fork {
        &self.fork
    }

    pub fn genesis_root(&self) -> B256 {
        self.genesis_root
    }

    pub fn seed(&self) -> B256 {
        self.seed
    }

    /// Active validator indices in registry order.
    pub fn active_indices(&self) -> &[u64] {
        &self.active_indices
    }

    pub fn active_count(&self) -> u64 {
        self.active_indices.len() as u64
    }

    /// Public key at position `index` of the active set.
    ///
    /// Panics if `index >= self.active_count()`.
    pub fn pubkey(&self, index: u64) -> &PubKey {
        &self.pubkeys[index as usize]
    }

    pub fn pubkeys(&self) -> &[PubKey] {
        &self.pubkeys
    }

    /// Return the signature domain of ``domain_type`` at ``epoch``, using the cached fork and
    /// genesis root.
    pub fn signing_domain(&self, domain_type: B32, epoch: u64) -> B256 {
        compute_domain(
            domain_type,
            Some(self.fork.version_at(epoch)),
            Some(self.genesis_root),
        )
    }

    pub fn attester_domain(&self, epoch: u64) -> B256 {
        self.signing_domain(DOMAIN_BEACON_ATTESTER, epoch)
    }
}
