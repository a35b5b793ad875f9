//! Object kind enumeration
//!
//! The store tags every object with a small integer; this module maps that
//! tag onto the closed set of four kinds and back, and renders the canonical
//! lowercase names used in log output and `cat-file`-style listings.

use crate::error::ObjectError;

/// Kind of a git object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Commit,
    Tree,
    Blob,
    Tag,
}

impl ObjectType {
    /// Map a store-reported type tag to a kind
    ///
    /// Tags follow the store's numbering: commit = 1, tree = 2, blob = 3,
    /// tag = 4. Anything outside the closed set yields `None` rather than an
    /// error; callers decoding a tree entry must treat that as a decode
    /// failure for the entry, never as a silent default.
    pub fn from_native_tag(tag: i32) -> Option<Self> {
        match tag {
            1 => Some(ObjectType::Commit),
            2 => Some(ObjectType::Tree),
            3 => Some(ObjectType::Blob),
            4 => Some(ObjectType::Tag),
            _ => None,
        }
    }

    /// The store's tag for this kind
    pub fn native_tag(&self) -> i32 {
        match self {
            ObjectType::Commit => 1,
            ObjectType::Tree => 2,
            ObjectType::Blob => 3,
            ObjectType::Tag => 4,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Commit => "commit",
            ObjectType::Tree => "tree",
            ObjectType::Blob => "blob",
            ObjectType::Tag => "tag",
        }
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = ObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "commit" => Ok(ObjectType::Commit),
            "tree" => Ok(ObjectType::Tree),
            "blob" => Ok(ObjectType::Blob),
            "tag" => Ok(ObjectType::Tag),
            _ => Err(ObjectError::InvalidObject(format!(
                "unknown object type name: {value}"
            ))),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
