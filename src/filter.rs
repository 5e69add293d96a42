//! Tag-intersection page filtering.
//!
//! The filter stage runs once per render, after every page's metadata has
//! been normalized. It is a pure single pass: no retries, no state beyond
//! the returned outcome.

use crate::data::Page;
use crate::tags::{Tag, TagSet};

/// Result of a filter pass.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Input collection restricted to matching pages, order preserved.
    pub pages: Vec<Page>,

    /// Tags of every kept page, untrimmed as originally parsed, in
    /// collection order. Duplicates retained.
    pub all_tags: TagSet,
}

/// Filter a page collection down to the pages sharing at least one tag
/// with `filter`.
///
/// An empty `filter` passes the collection through unchanged and
/// accumulates nothing. Page tags are trimmed for the comparison only;
/// the stored sets and the accumulated tags keep their original
/// whitespace. Filtering never adds or reorders pages.
pub fn filter_pages(pages: Vec<Page>, filter: &[Tag]) -> FilterOutcome {
    if filter.is_empty() {
        return FilterOutcome {
            pages,
            all_tags: TagSet::new(),
        };
    }

    let mut all_tags = TagSet::new();
    let pages = pages
        .into_iter()
        .filter(|page| {
            if !matches_filter(&page.meta.tags, filter) {
                return false;
            }
            all_tags.extend(page.meta.tags.iter().cloned());
            true
        })
        .collect();

    FilterOutcome { pages, all_tags }
}

/// Intersection test: exact string equality after trimming the page-side
/// tag. The filter side is already trimmed by `resolve_filter`.
fn matches_filter(tags: &[Tag], filter: &[Tag]) -> bool {
    tags.iter()
        .any(|tag| filter.iter().any(|wanted| wanted.as_str() == tag.trim()))
}
