use alloy_primitives::hex::{self, decode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ssz::Encode;
use ssz_derive::{Decode, Encode};
use ssz_types::{FixedVector, typenum};
use tree_hash_derive::TreeHash;

use crate::errors::BLSError;

pub const PUBKEY_LENGTH: usize = 48;

/// Compressed BLS12-381 G1 public key.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Encode, Decode, TreeHash, Default)]
pub struct PubKey {
    pub inner: FixedVector<u8, typenum::U48>,
}

impl Serialize for PubKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let val = hex::encode_prefixed(self.inner.as_ssz_bytes());
        serializer.serialize_str(&val)
    }
}

impl<'de> Deserialize<'de> for PubKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let result: String = Deserialize::deserialize(deserializer)?;
        pubkey_from_str(&result).map_err(serde::de::Error::custom)
    }
}

impl PubKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        if bytes.len() != PUBKEY_LENGTH {
            return Err(BLSError::InvalidByteLength {
                expected: PUBKEY_LENGTH,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            inner: FixedVector::from(bytes.to_vec()),
        })
    }

    pub fn to_bytes(&self) -> &[u8] {
        self.inner.iter().as_slice()
    }
}

impl From<[u8; PUBKEY_LENGTH]> for PubKey {
    fn from(bytes: [u8; PUBKEY_LENGTH]) -> Self {
        Self {
            inner: FixedVector::from(bytes.to_vec()),
        }
    }
}

pub fn pubkey_from_str(key_str: &str) -> Result<PubKey, BLSError> {
    let clean_str = key_str.strip_prefix("0x").unwrap_or(key_str);

    let bytes = match decode(clean_str) {
        Ok(b) => b,
        Err(_) => return Err(BLSError::InvalidHexString),
    };

    PubKey::from_bytes(&bytes)
}
