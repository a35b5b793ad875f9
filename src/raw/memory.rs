//! Owned in-memory object handles
//!
//! These back the test suite's hand-built fixtures and let callers that
//! already hold materialized object data reuse the decoders. Fields are
//! public so deliberately malformed handles (wrong id width, bogus type
//! tags, absent fields) can be constructed directly; the `new` constructors
//! cover the well-formed case.

use crate::object_type::ObjectType;
use crate::raw::{RawBlob, RawCommit, RawEntry, RawObject, RawSignature, RawTree};

/// In-memory signature record
#[derive(Debug, Clone, Default)]
pub struct MemorySignature {
    pub name: Option<Vec<u8>>,
    pub email: Option<Vec<u8>>,
    pub seconds_since_epoch: i64,
    pub offset_minutes: i32,
}

impl MemorySignature {
    pub fn new(name: &str, email: &str, seconds_since_epoch: i64, offset_minutes: i32) -> Self {
        Self {
            name: Some(name.as_bytes().to_vec()),
            email: Some(email.as_bytes().to_vec()),
            seconds_since_epoch,
            offset_minutes,
        }
    }
}

impl RawSignature for MemorySignature {
    fn name_bytes(&self) -> Option<&[u8]> {
        self.name.as_deref()
    }

    fn email_bytes(&self) -> Option<&[u8]> {
        self.email.as_deref()
    }

    fn seconds_since_epoch(&self) -> i64 {
        self.seconds_since_epoch
    }

    fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }
}

/// In-memory commit handle
#[derive(Debug, Clone)]
pub struct MemoryCommit {
    pub id: Option<Vec<u8>>,
    pub type_tag: i32,
    pub message: Option<Vec<u8>>,
    pub author: Option<MemorySignature>,
    pub committer: Option<MemorySignature>,
    pub tree_id: Option<Vec<u8>>,
    pub parent_ids: Vec<Vec<u8>>,
}

impl Default for MemoryCommit {
    fn default() -> Self {
        Self {
            id: None,
            type_tag: ObjectType::Commit.native_tag(),
            message: None,
            author: None,
            committer: None,
            tree_id: None,
            parent_ids: Vec::new(),
        }
    }
}

impl MemoryCommit {
    pub fn new(
        id: impl Into<Vec<u8>>,
        tree_id: impl Into<Vec<u8>>,
        parent_ids: Vec<Vec<u8>>,
        author: MemorySignature,
        committer: MemorySignature,
        message: &str,
    ) -> Self {
        Self {
            id: Some(id.into()),
            type_tag: ObjectType::Commit.native_tag(),
            message: Some(message.as_bytes().to_vec()),
            author: Some(author),
            committer: Some(committer),
            tree_id: Some(tree_id.into()),
            parent_ids,
        }
    }
}

impl RawObject for MemoryCommit {
    fn id_bytes(&self) -> Option<&[u8]> {
        self.id.as_deref()
    }

    fn type_tag(&self) -> i32 {
        self.type_tag
    }
}

impl RawCommit for MemoryCommit {
    fn message_bytes(&self) -> Option<&[u8]> {
        self.message.as_deref()
    }

    fn author(&self) -> Option<&dyn RawSignature> {
        self.author.as_ref().map(|author| author as &dyn RawSignature)
    }

    fn committer(&self) -> Option<&dyn RawSignature> {
        self.committer
            .as_ref()
            .map(|committer| committer as &dyn RawSignature)
    }

    fn tree_id_bytes(&self) -> Option<&[u8]> {
        self.tree_id.as_deref()
    }

    fn parent_count(&self) -> usize {
        self.parent_ids.len()
    }

    fn parent_id_bytes(&self, index: usize) -> Option<&[u8]> {
        self.parent_ids.get(index).map(Vec::as_slice)
    }
}

/// In-memory tree entry
#[derive(Debug, Clone, Default)]
pub struct MemoryEntry {
    pub mode: u32,
    pub type_tag: i32,
    pub id: Option<Vec<u8>>,
    pub name: Option<Vec<u8>>,
}

impl MemoryEntry {
    pub fn new(mode: u32, object_type: ObjectType, id: impl Into<Vec<u8>>, name: &str) -> Self {
        Self {
            mode,
            type_tag: object_type.native_tag(),
            id: Some(id.into()),
            name: Some(name.as_bytes().to_vec()),
        }
    }
}

impl RawEntry for MemoryEntry {
    fn mode(&self) -> u32 {
        self.mode
    }

    fn type_tag(&self) -> i32 {
        self.type_tag
    }

    fn id_bytes(&self) -> Option<&[u8]> {
        self.id.as_deref()
    }

    fn name_bytes(&self) -> Option<&[u8]> {
        self.name.as_deref()
    }
}

/// In-memory tree handle
#[derive(Debug, Clone)]
pub struct MemoryTree {
    pub id: Option<Vec<u8>>,
    pub type_tag: i32,
    pub entries: Vec<MemoryEntry>,
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self {
            id: None,
            type_tag: ObjectType::Tree.native_tag(),
            entries: Vec::new(),
        }
    }
}

impl MemoryTree {
    pub fn new(id: impl Into<Vec<u8>>, entries: Vec<MemoryEntry>) -> Self {
        Self {
            id: Some(id.into()),
            type_tag: ObjectType::Tree.native_tag(),
            entries,
        }
    }
}

impl RawObject for MemoryTree {
    fn id_bytes(&self) -> Option<&[u8]> {
        self.id.as_deref()
    }

    fn type_tag(&self) -> i32 {
        self.type_tag
    }
}

impl RawTree for MemoryTree {
    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn entry(&self, index: usize) -> Option<&dyn RawEntry> {
        self.entries.get(index).map(|entry| entry as &dyn RawEntry)
    }
}

/// In-memory blob handle
#[derive(Debug, Clone)]
pub struct MemoryBlob {
    pub id: Option<Vec<u8>>,
    pub type_tag: i32,
    pub size: u64,
    pub content: Option<Vec<u8>>,
}

impl Default for MemoryBlob {
    fn default() -> Self {
        Self {
            id: None,
            type_tag: ObjectType::Blob.native_tag(),
            size: 0,
            content: None,
        }
    }
}

impl MemoryBlob {
    pub fn new(id: impl Into<Vec<u8>>, content: impl Into<Vec<u8>>) -> Self {
        let content = content.into();

        Self {
            id: Some(id.into()),
            type_tag: ObjectType::Blob.native_tag(),
            size: content.len() as u64,
            content: Some(content),
        }
    }
}

impl RawObject for MemoryBlob {
    fn id_bytes(&self) -> Option<&[u8]> {
        self.id.as_deref()
    }

    fn type_tag(&self) -> i32 {
        self.type_tag
    }
}

impl RawBlob for MemoryBlob {
    fn size(&self) -> u64 {
        self.size
    }

    fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }
}
