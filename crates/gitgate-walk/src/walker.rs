//! Descent from a starting object through a residual path.

use gitgate_backend::ObjectBackend;
use gitgate_resolve::split_path;
use gitgate_types::{ObjectId, ObjectKind, TreeEntry};

use crate::error::{WalkError, WalkResult};
use crate::listing::TreeListing;

/// Walk from `root` through `residual`, returning blob bytes or a rendered
/// tree listing.
///
/// `url_prefix` is the normalized request path; it becomes the anchor
/// prefix of any listing produced. Segments are matched against entry
/// names by exact byte equality: no case folding, no globbing.
///
/// Backend calls happen in a strict sequence: the root tree, then one tree
/// per descended segment, then at most one blob read.
pub async fn walk(
    backend: &dyn ObjectBackend,
    root: &ObjectId,
    url_prefix: &str,
    residual: &str,
) -> WalkResult<Vec<u8>> {
    let mut id = root.clone();
    let mut residual = residual;
    loop {
        let entries = backend.list_tree(&id).await?;
        if residual.is_empty() {
            return render_listing(url_prefix, &entries);
        }

        let (head, tail) = split_path(residual);
        let Some(entry) = entries.iter().find(|entry| entry.name == head) else {
            return Err(WalkError::NotFound);
        };

        if tail.is_empty() {
            return match entry.kind {
                ObjectKind::Tree => {
                    let entries = backend.list_tree(&entry.id).await?;
                    render_listing(url_prefix, &entries)
                }
                ObjectKind::Blob => Ok(backend.read_blob(&entry.id).await?),
                kind => Err(WalkError::UnsupportedKind(kind)),
            };
        }
        match entry.kind {
            ObjectKind::Tree => {
                id = entry.id.clone();
                residual = tail;
            }
            ObjectKind::Blob => return Err(WalkError::FileInPath),
            kind => return Err(WalkError::UnsupportedKind(kind)),
        }
    }
}

fn render_listing(url_prefix: &str, entries: &[TreeEntry]) -> WalkResult<Vec<u8>> {
    Ok(TreeListing::new(url_prefix, entries).render_bytes()?)
}
