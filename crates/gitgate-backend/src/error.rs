use thiserror::Error;

/// Errors from object backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend subprocess could not be launched.
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend subprocess exited with a failure status.
    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// A reference-listing line did not have the `<40-hex> <refname>` shape.
    #[error("malformed ref line: {line:?}")]
    MalformedRefLine { line: String },

    /// A tree-listing line did not have the `<perms> <kind> <id>\t<name>` shape.
    #[error("malformed tree entry: {line:?}")]
    MalformedTreeEntry { line: String },

    /// The requested identifier names nothing in the store.
    #[error("unknown object: {0}")]
    UnknownObject(String),

    /// Object metadata failed to parse.
    #[error(transparent)]
    Type(#[from] gitgate_types::TypeError),
}

/// Result alias for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;
