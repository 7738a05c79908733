//! Foundation types for the gitgate gateway.
//!
//! The gateway models the backing store the way git's plumbing presents it:
//! opaque object identifiers, a closed set of object kinds, and tree entries
//! mapping names to child objects. These types carry no behavior beyond
//! parsing and display; everything that interprets them lives in the
//! resolver, walker, and backend crates.

pub mod error;
pub mod object;

pub use error::TypeError;
pub use object::{ObjectId, ObjectKind, TreeEntry};
