//! Left-split of slash-delimited paths.

/// Split a path into its first segment and the remainder.
///
/// One leading slash is stripped before splitting, a trailing slash yields
/// an empty remainder rather than an empty trailing segment:
///
/// ```
/// use gitgate_resolve::split_path;
///
/// assert_eq!(split_path("foo/bar/baz"), ("foo", "bar/baz"));
/// assert_eq!(split_path("/foo"), ("foo", ""));
/// assert_eq!(split_path("foo/"), ("foo", ""));
/// assert_eq!(split_path("/"), ("", ""));
/// ```
pub fn split_path(path: &str) -> (&str, &str) {
    let path = path.strip_prefix('/').unwrap_or(path);
    match path.find('/') {
        None => (path, ""),
        Some(i) => (&path[..i], &path[i + 1..]),
    }
}
