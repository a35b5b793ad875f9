//! Git commit record
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They reference their root tree and parent commits by id, and carry author
//! and committer signatures plus the message body.
//!
//! ## Decoding
//!
//! A commit is read out of a store-owned handle in one pass: identity hash,
//! message, author and committer signatures, root tree id, then the parent
//! ids in index order. Index 0 is the mainline parent in merge semantics, so
//! the sequence is never reordered or deduplicated. Everything is copied out
//! before the decoder returns; the record outlives the handle.

use crate::error::{ObjectError, ObjectResult};
use crate::object::{Object, expect_kind, read_id};
use crate::object_id::ObjectId;
use crate::object_type::ObjectType;
use crate::raw::RawCommit;
use crate::signature::Signature;
use std::hash::{Hash, Hasher};

/// Snapshot of the repository with metadata
///
/// The tree and parents are references by id, not embedded records; this
/// layer never resolves them. Equality and hashing go by the commit's own id
/// alone: the id is a hash of the content that determines every other field,
/// so two well-formed records with equal ids are the same object.
#[derive(Debug, Clone)]
pub struct Commit {
    oid: ObjectId,
    tree_oid: ObjectId,
    parents: Vec<ObjectId>,
    author: Signature,
    committer: Signature,
    message: String,
}

impl Commit {
    /// Decode a commit out of a store-owned handle
    ///
    /// Fails with [`ObjectError::InvalidObject`] if the handle is not a
    /// commit or any required field cannot be read.
    pub fn decode(raw: &(impl RawCommit + ?Sized)) -> ObjectResult<Self> {
        expect_kind(ObjectType::Commit, raw.type_tag())?;
        let oid = read_id("commit id", raw.id_bytes())?;

        let message = raw.message_bytes().ok_or_else(|| {
            ObjectError::InvalidObject(format!(
                "commit {}: unreadable message",
                oid.short_hex()
            ))
        })?;
        let message = String::from_utf8(message.to_vec()).map_err(|_| {
            ObjectError::InvalidObject(format!(
                "commit {}: message is not valid UTF-8",
                oid.short_hex()
            ))
        })?;

        let author = raw.author().ok_or_else(|| {
            ObjectError::InvalidObject(format!("commit {}: unreadable author", oid.short_hex()))
        })?;
        let author = Signature::decode(author)?;

        let committer = raw.committer().ok_or_else(|| {
            ObjectError::InvalidObject(format!(
                "commit {}: unreadable committer",
                oid.short_hex()
            ))
        })?;
        let committer = Signature::decode(committer)?;

        let tree_oid = read_id("tree id", raw.tree_id_bytes())?;

        let mut parents = Vec::with_capacity(raw.parent_count());
        for index in 0..raw.parent_count() {
            let parent = read_id("parent id", raw.parent_id_bytes(index))?;
            parents.push(parent);
        }

        Ok(Self {
            oid,
            tree_oid,
            parents,
            author,
            committer,
            message,
        })
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Id of the root tree snapshot
    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    /// Parent ids in index order (empty for a root commit)
    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// The mainline parent, if any
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn author(&self) -> &Signature {
        &self.author
    }

    pub fn committer(&self) -> &Signature {
        &self.committer
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    ///
    /// Useful for short-form display (e.g., `log --oneline`)
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }
}

// Identity goes by content hash, never by field comparison.
impl PartialEq for Commit {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
    }
}

impl Eq for Commit {}

impl Hash for Commit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.oid.hash(state);
    }
}

impl Object for Commit {
    fn oid(&self) -> &ObjectId {
        &self.oid
    }

    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
