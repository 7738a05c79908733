use async_trait::async_trait;
use gitgate_types::{ObjectId, TreeEntry};

use crate::error::BackendResult;

/// Read-only access to a version-control object store.
///
/// All implementations must satisfy these invariants:
/// - Calls are independent: the gateway invokes the backend concurrently
///   from unrelated request handlers with no coordination.
/// - Identifiers are opaque. Full hashes, abbreviated prefixes, and
///   reference names are all forwarded as-is; resolving them is the
///   backend's job.
/// - All failures are propagated as errors, never silently ignored.
#[async_trait]
pub trait ObjectBackend: Send + Sync {
    /// Enumerate all references, stripped of the `refs/` storage namespace.
    ///
    /// Returned names may contain slashes (`heads/master`,
    /// `remotes/origin/master`) but never begin or end with one.
    async fn list_refs(&self) -> BackendResult<Vec<String>>;

    /// List the entries of the tree at `id`.
    ///
    /// Fails if the identifier is unknown or does not name a listable
    /// object. Entry order follows the store's output order.
    async fn list_tree(&self, id: &ObjectId) -> BackendResult<Vec<TreeEntry>>;

    /// Read the raw bytes of the blob at `id`.
    async fn read_blob(&self, id: &ObjectId) -> BackendResult<Vec<u8>>;

    /// Check that the backing repository is usable. Called once at startup.
    async fn probe_repo(&self) -> BackendResult<()>;
}
