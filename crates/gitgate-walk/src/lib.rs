//! Tree walking for the gitgate gateway.
//!
//! Given a starting object and a residual path, [`walk`] descends
//! segment-by-segment through nested trees and terminates on either a blob
//! (verbatim bytes) or a tree (an HTML listing rendered by
//! [`TreeListing`]). Commits and tags are dead ends; hitting one mid-walk
//! is an error.

pub mod error;
pub mod listing;
pub mod walker;

pub use error::{WalkError, WalkResult};
pub use listing::TreeListing;
pub use walker::walk;
