//! URL-to-object resolution for the gitgate gateway.
//!
//! A request path like `/blob/tags/rooted/tags/are/tricky/src/main.rs` is
//! ambiguous on its face: reference names may themselves contain slashes, so
//! the boundary between the reference and the path inside the tree is not a
//! fixed segment. This crate finds that boundary:
//!
//! - [`split_path`] -- left-split of a slash path into first segment and
//!   remainder.
//! - [`sort_refs`] -- orders a reference set most-specific first (more
//!   slashes, then longer).
//! - [`resolve_ref`] -- two-pass longest-reference match against a URL
//!   suffix, with implicit `heads/` and `tags/` namespaces.
//!
//! Resolution failure is recoverable: the dispatcher falls back to treating
//! the first segment as a hash literal.

pub mod error;
pub mod order;
pub mod resolver;
pub mod split;

pub use error::{ResolveError, ResolveResult};
pub use order::{by_specificity, sort_refs};
pub use resolver::resolve_ref;
pub use split::split_path;
