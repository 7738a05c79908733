//! Ordering of reference names by specificity.
//!
//! Longer, more deeply qualified references must be tried before their
//! prefixes: `tags/rooted/tags/are/tricky` has to win over `tags/rooted`
//! when both exist. Sorting the reference set with [`by_specificity`]
//! before resolution makes the resolver's first match the right one.

use std::cmp::Ordering;

fn slash_count(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'/').count()
}

/// Compare two reference names, most-specific first.
///
/// Descending slash count, then descending length. This is a comparator
/// function rather than an `Ord` impl: distinct names with equal slash
/// counts and lengths compare equal, which `Ord` forbids.
pub fn by_specificity(a: &str, b: &str) -> Ordering {
    slash_count(b)
        .cmp(&slash_count(a))
        .then(b.len().cmp(&a.len()))
}

/// Sort a reference set most-specific first.
///
/// The sort is stable, so ties keep their insertion order and identical
/// inputs produce identical orderings across runs.
pub fn sort_refs(refs: &mut [String]) {
    refs.sort_by(|a, b| by_specificity(a, b));
}
