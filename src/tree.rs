//! Git tree record
//!
//! Trees represent directory snapshots. Each entry names a blob (file), a
//! nested tree (subdirectory), or a commit (submodule gitlink) together with
//! its recorded UNIX file mode.
//!
//! ## Decoding
//!
//! Entries are read by index out of the store-owned handle and keyed by
//! name. Lookup is by name, so the original on-disk ordering is not
//! recorded. A valid encoding has unique names; if a malformed tree repeats
//! one, the later entry wins and the overwrite is logged rather than
//! rejecting the whole tree.

use crate::error::{ObjectError, ObjectResult};
use crate::object::{Object, expect_kind, read_id};
use crate::object_id::ObjectId;
use crate::object_type::ObjectType;
use crate::raw::{RawEntry, RawTree};
use derive_new::new;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Single directory entry of a tree
///
/// The mode is stored exactly as the store reported it, with no masking and
/// no legality validation; interpreting mode semantics is the consumer's
/// concern. Equality is structural over all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Entry {
    mode: u32,
    object_type: ObjectType,
    oid: ObjectId,
    name: String,
}

impl Entry {
    /// Decode one entry out of a store-owned tree handle
    ///
    /// Fails with [`ObjectError::InvalidObject`] if the entry's type tag is
    /// outside the known set or its name is not valid text.
    pub fn decode(raw: &(impl RawEntry + ?Sized)) -> ObjectResult<Self> {
        let object_type = ObjectType::from_native_tag(raw.type_tag()).ok_or_else(|| {
            ObjectError::InvalidObject(format!(
                "tree entry has unknown type tag {}",
                raw.type_tag()
            ))
        })?;
        let oid = read_id("tree entry id", raw.id_bytes())?;

        let name = raw.name_bytes().ok_or_else(|| {
            ObjectError::InvalidObject(format!(
                "tree entry {}: unreadable name",
                oid.short_hex()
            ))
        })?;
        let name = String::from_utf8(name.to_vec()).map_err(|_| {
            ObjectError::InvalidObject(format!(
                "tree entry {}: name is not valid UTF-8",
                oid.short_hex()
            ))
        })?;

        Ok(Self {
            mode: raw.mode(),
            object_type,
            oid,
            name,
        })
    }

    /// UNIX file mode exactly as recorded (e.g. 0o100644, 0o040000)
    pub fn mode(&self) -> u32 {
        self.mode
    }

    /// Kind of the referenced object: tree for subdirectories, blob for
    /// files, commit for gitlinks
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Id of the referenced object
    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Path segment, without separators
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Directory snapshot keyed by entry name
///
/// Equality and hashing go by the tree's own id alone, as for commits.
#[derive(Debug, Clone)]
pub struct Tree {
    oid: ObjectId,
    entries: BTreeMap<String, Entry>,
}

impl Tree {
    /// Decode a tree out of a store-owned handle
    ///
    /// Fails with [`ObjectError::InvalidObject`] if the handle is not a tree
    /// or any entry fails to decode.
    pub fn decode(raw: &(impl RawTree + ?Sized)) -> ObjectResult<Self> {
        expect_kind(ObjectType::Tree, raw.type_tag())?;
        let oid = read_id("tree id", raw.id_bytes())?;

        let mut entries = BTreeMap::new();
        for index in 0..raw.entry_count() {
            let entry = raw.entry(index).ok_or_else(|| {
                ObjectError::InvalidObject(format!(
                    "tree {}: unreadable entry {index}",
                    oid.short_hex()
                ))
            })?;
            let entry = Entry::decode(entry)?;

            if let Some(previous) = entries.insert(entry.name().to_string(), entry) {
                debug!(
                    tree = %oid.short_hex(),
                    name = %previous.name(),
                    "duplicate tree entry name, keeping the later entry"
                );
            }
        }

        Ok(Self { oid, entries })
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Look up an entry by its path segment
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
    }
}

impl Eq for Tree {}

impl Hash for Tree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.oid.hash(state);
    }
}

impl Object for Tree {
    fn oid(&self) -> &ObjectId {
        &self.oid
    }

    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}
