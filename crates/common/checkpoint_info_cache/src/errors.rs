use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckpointInfoCacheError {
    #[error("Failed to hash checkpoint: {0}")]
    Hashing(String),

    #[error("Active indices and public keys differ in length: {indices} indices, {pubkeys} keys")]
    LengthMismatch { indices: usize, pubkeys: usize },
}
