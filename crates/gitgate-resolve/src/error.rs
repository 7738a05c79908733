use thiserror::Error;

/// Errors from reference resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No reference matched the URL suffix, directly or under an implicit
    /// namespace. The caller may fall back to hash-literal interpretation.
    #[error("could not find a reference matching {suffix:?}")]
    NoMatchingRef { suffix: String },
}

/// Result alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
