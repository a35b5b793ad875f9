//! Typed value model and decoders for git objects
//!
//! This crate is the data-model layer beneath git tooling: the object store
//! locates raw objects and exposes native handles to them, and this layer
//! turns those handles into immutable, strongly-typed, hashable records.
//!
//! - **ObjectId**: fixed-width content hash, the universal identity key
//! - **ObjectType**: closed commit/tree/blob/tag enumeration
//! - **Signature**: author/committer identity with a timezone-aware instant
//! - **Commit**: tree reference, ordered parents, signatures, message
//! - **Tree**: name-keyed directory entries (mode, kind, id, name)
//! - **Blob**: owned content bytes
//!
//! Commits, trees, and blobs compare and hash by content hash alone; the
//! hash both identifies and authenticates the record's content. Decoding is
//! synchronous and single-pass: each decoder borrows a handle through the
//! [`raw`] accessor traits for the duration of one call and copies out
//! everything it needs, so the records are freely shareable across threads
//! with no remaining tie to the store.
//!
//! # Examples
//!
//! ```
//! use bit_object::Blob;
//! use bit_object::raw::MemoryBlob;
//!
//! let raw = MemoryBlob::new([0x2a; 20], *b"hello");
//! let blob = Blob::decode(&raw)?;
//!
//! assert_eq!(blob.data(), b"hello");
//! assert_eq!(blob.oid().to_hex(), "2a".repeat(20));
//! # Ok::<(), bit_object::ObjectError>(())
//! ```

mod blob;
mod commit;
mod error;
mod object;
mod object_id;
mod object_type;
pub mod raw;
mod signature;
mod tree;

pub use blob::Blob;
pub use commit::Commit;
pub use error::{ObjectError, ObjectResult};
pub use object::{AnyObject, Object};
pub use object_id::{OBJECT_ID_HEX_LENGTH, OBJECT_ID_RAW_LENGTH, ObjectId};
pub use object_type::ObjectType;
pub use signature::Signature;
pub use tree::{Entry, Tree};
