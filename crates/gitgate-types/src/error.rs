use thiserror::Error;

/// Errors from parsing backend-provided object metadata.
#[derive(Debug, Error)]
pub enum TypeError {
    /// The object kind field was none of blob/tree/commit/tag.
    #[error("unknown object kind: {0:?}")]
    UnknownKind(String),

    /// The permissions field was not a decimal unsigned integer.
    #[error("could not parse permissions {field:?} for entry {name:?}")]
    InvalidPermissions { field: String, name: String },
}
