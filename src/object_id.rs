//! Git object identifier (content hash)
//!
//! Object IDs are fixed-width SHA-1 digests that both identify and, via the
//! store's hashing scheme, authenticate an object's content. They are the
//! sole identity key for every object kind: two IDs are equal iff their byte
//! sequences are equal, and the ordering is lexicographic over the bytes so
//! IDs can serve as map and set keys.
//!
//! ## Format
//!
//! - Raw: 20 bytes, as reported by the store
//! - Text: 40 lowercase hexadecimal characters
//! - Short: first 7 hex characters, for diagnostics

use crate::error::{ObjectError, ObjectResult};
use std::str::FromStr;

/// Width of a raw object ID in bytes
///
/// A longer digest only changes this constant and its hex counterpart; the
/// model's shape is unaffected.
pub const OBJECT_ID_RAW_LENGTH: usize = 20;

/// Width of an object ID in hexadecimal text
pub const OBJECT_ID_HEX_LENGTH: usize = OBJECT_ID_RAW_LENGTH * 2;

/// Content hash identifying an object in the store
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; OBJECT_ID_RAW_LENGTH]);

impl ObjectId {
    /// Construct an object ID from the store-reported raw hash bytes
    ///
    /// # Arguments
    ///
    /// * `bytes` - exactly [`OBJECT_ID_RAW_LENGTH`] bytes
    pub fn from_bytes(bytes: &[u8]) -> ObjectResult<Self> {
        let raw: [u8; OBJECT_ID_RAW_LENGTH] = bytes.try_into().map_err(|_| {
            ObjectError::MalformedId(format!(
                "expected {OBJECT_ID_RAW_LENGTH} bytes, got {}",
                bytes.len()
            ))
        })?;

        Ok(Self(raw))
    }

    /// Parse an object ID from its hexadecimal rendering
    pub fn from_hex(hex: &str) -> ObjectResult<Self> {
        if hex.len() != OBJECT_ID_HEX_LENGTH {
            return Err(ObjectError::MalformedId(format!(
                "expected {OBJECT_ID_HEX_LENGTH} hex characters, got {}",
                hex.len()
            )));
        }

        let bytes = hex::decode(hex)
            .map_err(|_| ObjectError::MalformedId(format!("not valid hex: {hex}")))?;

        Self::from_bytes(&bytes)
    }

    /// Raw hash bytes
    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_RAW_LENGTH] {
        &self.0
    }

    /// Canonical lowercase hexadecimal rendering
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Abbreviated form used in log output and error messages
    pub fn short_hex(&self) -> String {
        self.to_hex().split_at(7).0.to_string()
    }
}

impl FromStr for ObjectId {
    type Err = ObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}
