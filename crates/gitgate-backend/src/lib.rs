//! Object backends for the gitgate gateway.
//!
//! The gateway core never parses the object database itself; it depends on
//! the [`ObjectBackend`] capability trait for reference enumeration, tree
//! listing, and blob reads.
//!
//! # Backends
//!
//! - [`GitCliBackend`] -- shells out to the `git` binary and parses its
//!   plumbing output. The repository path travels with every invocation
//!   (`git -C`), so no process-global working directory is involved.
//! - [`InMemoryBackend`] -- deterministic fake for tests and embedding.

pub mod error;
pub mod git;
pub mod memory;
pub mod traits;

pub use error::{BackendError, BackendResult};
pub use git::GitCliBackend;
pub use memory::InMemoryBackend;
pub use traits::ObjectBackend;
