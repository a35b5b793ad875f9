//! Git blob record
//!
//! Blobs store raw file content. They carry no metadata of their own; name
//! and mode live in the tree entries that reference them.
//!
//! ## Decoding
//!
//! The store reports the content as a pointer/length pair. The length is a
//! 64-bit count and is checked against the platform's addressable range
//! before exactly that many bytes are copied into an owned buffer; a
//! zero-length blob is valid and yields an empty buffer.

use crate::error::{ObjectError, ObjectResult};
use crate::object::{Object, expect_kind, read_id};
use crate::object_id::ObjectId;
use crate::object_type::ObjectType;
use crate::raw::RawBlob;
use bytes::Bytes;
use std::hash::{Hash, Hasher};

/// Raw file content with its identity hash
///
/// Equality and hashing go by the blob's own id alone, as for commits.
#[derive(Debug, Clone)]
pub struct Blob {
    oid: ObjectId,
    data: Bytes,
}

impl Blob {
    /// Decode a blob out of a store-owned handle
    ///
    /// Fails with [`ObjectError::InvalidObject`] if the handle is not a
    /// blob, the declared length does not fit this platform, or the handle
    /// exposes fewer bytes than it declares.
    pub fn decode(raw: &(impl RawBlob + ?Sized)) -> ObjectResult<Self> {
        expect_kind(ObjectType::Blob, raw.type_tag())?;
        let oid = read_id("blob id", raw.id_bytes())?;

        let declared = raw.size();
        let length = usize::try_from(declared).map_err(|_| {
            ObjectError::InvalidObject(format!(
                "blob {}: content length {declared} does not fit this platform",
                oid.short_hex()
            ))
        })?;

        let data = if length == 0 {
            Bytes::new()
        } else {
            let content = raw.content().ok_or_else(|| {
                ObjectError::InvalidObject(format!(
                    "blob {}: unreadable content",
                    oid.short_hex()
                ))
            })?;
            if content.len() < length {
                return Err(ObjectError::InvalidObject(format!(
                    "blob {}: handle exposes {} bytes but declares {declared}",
                    oid.short_hex(),
                    content.len()
                )));
            }

            Bytes::copy_from_slice(&content[..length])
        };

        Ok(Self { oid, data })
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Content bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl PartialEq for Blob {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
    }
}

impl Eq for Blob {}

impl Hash for Blob {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.oid.hash(state);
    }
}

impl Object for Blob {
    fn oid(&self) -> &ObjectId {
        &self.oid
    }

    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::MemoryBlob;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_length_blob_yields_an_empty_buffer() {
        let blob = Blob::decode(&MemoryBlob::new([0x44; 20], Vec::new())).unwrap();

        assert!(blob.is_empty());
        assert_eq!(blob.data(), b"");
    }

    #[test]
    fn zero_length_blob_tolerates_an_absent_pointer() {
        let raw = MemoryBlob {
            id: Some(vec![0x44; 20]),
            ..MemoryBlob::default()
        };

        let blob = Blob::decode(&raw).unwrap();

        assert!(blob.is_empty());
    }

    #[test]
    fn copies_exactly_the_declared_length() {
        let blob = Blob::decode(&MemoryBlob::new([0x44; 20], *b"hello, store")).unwrap();

        assert_eq!(blob.len(), 12);
        assert_eq!(blob.data(), b"hello, store");
    }

    #[test]
    fn declared_length_beyond_the_buffer_is_rejected() {
        let mut raw = MemoryBlob::new([0x44; 20], *b"short");
        raw.size = 64;

        assert!(matches!(
            Blob::decode(&raw),
            Err(ObjectError::InvalidObject(_))
        ));
    }

    #[test]
    fn rejects_a_non_blob_handle() {
        let mut raw = MemoryBlob::new([0x44; 20], *b"data");
        raw.type_tag = ObjectType::Commit.native_tag();

        assert!(matches!(
            Blob::decode(&raw),
            Err(ObjectError::InvalidObject(_))
        ));
    }
}
