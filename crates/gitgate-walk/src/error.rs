use thiserror::Error;

use gitgate_backend::BackendError;
use gitgate_types::ObjectKind;

/// Errors from walking a residual path through nested trees.
///
/// The display strings are user-visible: the dispatcher writes them
/// verbatim into 404 response bodies.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The current path segment names no entry in the tree.
    #[error("file not found in tree")]
    NotFound,

    /// The path implies further descent, but the entry is a blob.
    #[error("this is a directory, not an object")]
    FileInPath,

    /// A commit or tag appeared where a blob or tree was expected.
    #[error("unsupported object type: {0}")]
    UnsupportedKind(ObjectKind),

    /// The backend could not list a tree or read a blob.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The listing template failed to render.
    #[error("failed to render listing: {0}")]
    Render(#[from] askama::Error),
}

/// Result alias for walk operations.
pub type WalkResult<T> = Result<T, WalkError>;
