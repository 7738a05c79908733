//! Longest-reference matching against URL suffixes.

use crate::error::{ResolveError, ResolveResult};

/// Implicit namespaces tried in pass 2, branches before tags.
const NAMESPACES: [&str; 2] = ["heads/", "tags/"];

/// Match a URL suffix against a reference set sorted by
/// [`sort_refs`](crate::sort_refs), returning the matched reference and the
/// residual path.
///
/// Two passes over the references, in order:
///
/// 1. **Direct prefix**: the suffix itself starts with a fully qualified
///    reference (`tags/0.0.0.0.1/gitserve.go`).
/// 2. **Implicit namespace**: the suffix starts with an unqualified branch
///    or tag name (`master/Makefile` matching `heads/master`). Branches
///    are tried before tags at each element.
///
/// The residual is the suffix with the matched portion and one leading
/// slash removed. Because the set is sorted most-specific first, the first
/// match is the deepest one; a reference matching at a non-segment boundary
/// (`do` against `dove/x`) still matches, longer references win through the
/// ordering alone.
pub fn resolve_ref<'a>(
    url_suffix: &'a str,
    refs_sorted: &'a [String],
) -> ResolveResult<(&'a str, &'a str)> {
    for r in refs_sorted {
        if url_suffix.starts_with(r.as_str()) {
            return Ok((r, strip_leading_slash(&url_suffix[r.len()..])));
        }
    }
    for r in refs_sorted {
        for ns in NAMESPACES {
            // Equivalent to testing `ns + url_suffix` against `r`, minus the
            // allocation. A reference shorter than the namespace itself
            // consumes nothing from the suffix and cannot name an object.
            let Some(unqualified) = r.strip_prefix(ns) else {
                continue;
            };
            if url_suffix.starts_with(unqualified) {
                return Ok((r, strip_leading_slash(&url_suffix[unqualified.len()..])));
            }
        }
    }
    Err(ResolveError::NoMatchingRef {
        suffix: url_suffix.to_string(),
    })
}

fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}
