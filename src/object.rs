//! Shared object capability and closed-set dispatch
//!
//! Every decoded record has an identity hash; the [`Object`] trait exposes
//! that capability uniformly, and [`AnyObject`] carries one record of any
//! kind for callers that prefer matching over a closed set.

use crate::blob::Blob;
use crate::commit::Commit;
use crate::error::{ObjectError, ObjectResult};
use crate::object_id::ObjectId;
use crate::object_type::ObjectType;
use crate::tree::Tree;

/// Capability shared by every decoded object: it has an identity hash
pub trait Object {
    fn oid(&self) -> &ObjectId;

    fn object_type(&self) -> ObjectType;
}

/// A decoded object of any decodable kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyObject {
    Commit(Commit),
    Tree(Tree),
    Blob(Blob),
}

impl Object for AnyObject {
    fn oid(&self) -> &ObjectId {
        match self {
            AnyObject::Commit(commit) => commit.oid(),
            AnyObject::Tree(tree) => tree.oid(),
            AnyObject::Blob(blob) => blob.oid(),
        }
    }

    fn object_type(&self) -> ObjectType {
        match self {
            AnyObject::Commit(_) => ObjectType::Commit,
            AnyObject::Tree(_) => ObjectType::Tree,
            AnyObject::Blob(_) => ObjectType::Blob,
        }
    }
}

impl From<Commit> for AnyObject {
    fn from(value: Commit) -> Self {
        Self::Commit(value)
    }
}

impl From<Tree> for AnyObject {
    fn from(value: Tree) -> Self {
        Self::Tree(value)
    }
}

impl From<Blob> for AnyObject {
    fn from(value: Blob) -> Self {
        Self::Blob(value)
    }
}

/// Check that a handle's tag names the kind a decoder expects
pub(crate) fn expect_kind(expected: ObjectType, tag: i32) -> ObjectResult<()> {
    match ObjectType::from_native_tag(tag) {
        Some(kind) if kind == expected => Ok(()),
        Some(kind) => Err(ObjectError::InvalidObject(format!(
            "expected a {expected} handle, got {kind}"
        ))),
        None => Err(ObjectError::InvalidObject(format!(
            "expected a {expected} handle, got unknown type tag {tag}"
        ))),
    }
}

/// Read a required id field out of a handle
pub(crate) fn read_id(field: &str, bytes: Option<&[u8]>) -> ObjectResult<ObjectId> {
    let bytes =
        bytes.ok_or_else(|| ObjectError::InvalidObject(format!("unreadable {field}")))?;

    ObjectId::from_bytes(bytes)
}
