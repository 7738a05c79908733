use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Identifier of an object in the backing store.
///
/// Held as an opaque string. Both full hex content-address hashes and
/// abbreviated prefixes are accepted at the boundary; the gateway never
/// validates length or content and leaves prefix resolution to the backend.
/// Reference names are also valid identifiers wherever the backend resolves
/// them (git plumbing accepts either).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The kind of a stored object.
///
/// A closed set: only blobs and trees are navigable by the gateway, the
/// other two surface as "unsupported object type" when encountered
/// mid-walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Raw content; a file's bytes.
    Blob,
    /// Directory listing mapping names to child objects.
    Tree,
    /// Snapshot with metadata; not navigable.
    Commit,
    /// Annotated tag object; not navigable.
    Tag,
}

impl ObjectKind {
    /// Returns `true` for the kinds the walker can terminate or descend on.
    pub fn is_navigable(&self) -> bool {
        matches!(self, Self::Blob | Self::Tree)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob => write!(f, "blob"),
            Self::Tree => write!(f, "tree"),
            Self::Commit => write!(f, "commit"),
            Self::Tag => write!(f, "tag"),
        }
    }
}

impl FromStr for ObjectKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blob" => Ok(Self::Blob),
            "tree" => Ok(Self::Tree),
            "commit" => Ok(Self::Commit),
            "tag" => Ok(Self::Tag),
            other => Err(TypeError::UnknownKind(other.to_string())),
        }
    }
}

/// A single entry in a tree object.
///
/// Parsed from the backend's text output: permissions are decimal in that
/// output, and the name is the final path component, never containing a
/// slash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Permission bits as printed by the backend.
    pub perms: u32,
    /// Kind of the referenced object.
    pub kind: ObjectKind,
    /// Identifier of the referenced object.
    pub id: ObjectId,
    /// Entry name (file or directory name).
    pub name: String,
}

impl TreeEntry {
    /// Create a new tree entry.
    pub fn new(perms: u32, kind: ObjectKind, id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            perms,
            kind,
            id,
            name: name.into(),
        }
    }

    /// Returns `true` if the entry points at a subtree.
    pub fn is_tree(&self) -> bool {
        self.kind == ObjectKind::Tree
    }
}
