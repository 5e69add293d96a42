//! Tag parsing and filter resolution.
//!
//! Converts raw comma-separated front-matter strings into tag sequences.
//!
//! Two contracts with deliberately different whitespace handling:
//!
//! | Function | Trimming |
//! |----------|----------|
//! | [`parse_tags`] | none - segments keep their raw whitespace |
//! | [`resolve_filter`] | every tag in the merged filter set is trimmed |
//!
//! A page's own `tags` set is never trimmed; trimming for the intersection
//! test happens at comparison time in the filter stage.

use crate::query::QueryParams;

/// A single tag token. Case is preserved.
pub type Tag = String;

/// Ordered sequence of tags. Insertion order follows the source string;
/// duplicates are retained.
pub type TagSet = Vec<Tag>;

// ============================================================================
// Parsing
// ============================================================================

/// Parse a raw comma-separated tag string into a [`TagSet`].
///
/// Splits on `,` with no trimming: `"a, b ,c"` yields `["a", " b ", "c"]`.
/// Absent or empty input yields an empty set; there is no error condition.
pub fn parse_tags(raw: Option<&str>) -> TagSet {
    match raw {
        Some(s) if !s.is_empty() => s.split(',').map(str::to_owned).collect(),
        _ => TagSet::new(),
    }
}

/// Resolve the effective filter set for a page.
///
/// Merges the URL-sourced filter (when `query_param_name` names a parameter
/// present in `query`) with the page-declared filter, URL tags first.
/// Ordering has no effect on the intersection test, only on the display
/// order of accumulated tags.
///
/// Every tag in the merged set is trimmed of surrounding whitespace.
pub fn resolve_filter(
    page_filter_raw: Option<&str>,
    query_param_name: Option<&str>,
    query: &QueryParams,
) -> TagSet {
    let url_filter = query_param_name
        .and_then(|name| query.get(name))
        .map(|value| parse_tags(Some(value)))
        .unwrap_or_default();

    url_filter
        .into_iter()
        .chain(parse_tags(page_filter_raw))
        .map(|tag| tag.trim().to_owned())
        .collect()
}
