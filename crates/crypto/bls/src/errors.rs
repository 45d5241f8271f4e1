use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BLSError {
    #[error("Invalid hex string")]
    InvalidHexString,

    #[error("Invalid byte length: expected {expected}, got {actual}")]
    InvalidByteLength { expected: usize, actual: usize },
}
