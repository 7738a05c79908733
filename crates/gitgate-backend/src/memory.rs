//! In-memory backend for tests and embedding.

use std::collections::HashMap;

use async_trait::async_trait;

use gitgate_types::{ObjectId, TreeEntry};

use crate::error::{BackendError, BackendResult};
use crate::traits::ObjectBackend;

/// Deterministic in-memory object store.
///
/// Mirrors what the git CLI accepts at the identifier boundary: exact
/// object ids, reference names, and unique id prefixes all resolve.
/// Fixtures are built with the `insert_*` methods; iteration order of tree
/// entries is insertion order.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    refs: Vec<String>,
    ref_targets: HashMap<String, ObjectId>,
    trees: HashMap<ObjectId, Vec<TreeEntry>>,
    blobs: HashMap<ObjectId, Vec<u8>>,
}

impl InMemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reference (already stripped of `refs/`) pointing at an
    /// object.
    pub fn insert_ref(&mut self, name: impl Into<String>, target: ObjectId) {
        let name = name.into();
        self.refs.push(name.clone());
        self.ref_targets.insert(name, target);
    }

    /// Register a tree object with the given entries.
    pub fn insert_tree(&mut self, id: ObjectId, entries: Vec<TreeEntry>) {
        self.trees.insert(id, entries);
    }

    /// Register a blob object with the given content.
    pub fn insert_blob(&mut self, id: ObjectId, data: Vec<u8>) {
        self.blobs.insert(id, data);
    }

    /// Resolve a reference name, exact id, or unique id prefix.
    fn resolve(&self, id: &ObjectId) -> BackendResult<ObjectId> {
        if let Some(target) = self.ref_targets.get(id.as_str()) {
            return Ok(target.clone());
        }
        if self.trees.contains_key(id) || self.blobs.contains_key(id) {
            return Ok(id.clone());
        }
        if !id.as_str().is_empty() {
            let mut matches = self
                .trees
                .keys()
                .chain(self.blobs.keys())
                .filter(|key| key.as_str().starts_with(id.as_str()));
            if let (Some(key), None) = (matches.next(), matches.next()) {
                return Ok(key.clone());
            }
        }
        Err(BackendError::UnknownObject(id.to_string()))
    }
}

#[async_trait]
impl ObjectBackend for InMemoryBackend {
    async fn list_refs(&self) -> BackendResult<Vec<String>> {
        Ok(self.refs.clone())
    }

    async fn list_tree(&self, id: &ObjectId) -> BackendResult<Vec<TreeEntry>> {
        let id = self.resolve(id)?;
        self.trees
            .get(&id)
            .cloned()
            .ok_or_else(|| BackendError::UnknownObject(id.to_string()))
    }

    async fn read_blob(&self, id: &ObjectId) -> BackendResult<Vec<u8>> {
        let id = self.resolve(id)?;
        self.blobs
            .get(&id)
            .cloned()
            .ok_or_else(|| BackendError::UnknownObject(id.to_string()))
    }

    async fn probe_repo(&self) -> BackendResult<()> {
        Ok(())
    }
}
