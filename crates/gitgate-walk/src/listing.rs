//! HTML directory listings for tree objects.

use askama::Template;

use gitgate_types::TreeEntry;

/// HTML listing of a tree's entries.
///
/// One anchor per entry, `href = <prefix>/<name>` with a trailing slash
/// appended for subtrees so relative navigation keeps working. Names are
/// HTML-escaped by the template engine. No styling, no metadata beyond the
/// anchors.
#[derive(Template)]
#[template(
    source = "<html>
<body>
<ul>
{% for row in rows %}<li><a href=\"{{ prefix }}/{{ row.name }}{% if row.is_tree %}/{% endif %}\">{{ row.name }}</a>
{% endfor %}</ul>
</body>
</html>
",
    ext = "html"
)]
pub struct TreeListing<'a> {
    prefix: &'a str,
    rows: Vec<ListingRow<'a>>,
}

/// One anchor row in a listing.
struct ListingRow<'a> {
    name: &'a str,
    is_tree: bool,
}

impl<'a> TreeListing<'a> {
    /// Build a listing for `entries` linked under `prefix`.
    pub fn new(prefix: &'a str, entries: &'a [TreeEntry]) -> Self {
        let rows = entries
            .iter()
            .map(|entry| ListingRow {
                name: &entry.name,
                is_tree: entry.is_tree(),
            })
            .collect();
        Self { prefix, rows }
    }

    /// Render to response bytes.
    pub fn render_bytes(&self) -> Result<Vec<u8>, askama::Error> {
        self.render().map(String::into_bytes)
    }
}
