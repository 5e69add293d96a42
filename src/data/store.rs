//! Per-render tag accumulation.
//!
//! Provides a thread-safe store for the tags collected while filtering one
//! render's page collection.
//!
//! # Performance Optimization
//!
//! JSON serialization is cached: when a template reads the same variable
//! several times during a render, the JSON is generated once and reused.

use parking_lot::RwLock;

use super::types::{TagCounts, TemplateVars};
use crate::tags::{Tag, TagSet};

/// Cached JSON strings for template export.
///
/// Generated lazily on first read, invalidated by any write.
#[derive(Debug, Default)]
struct JsonCache {
    all_tags: Option<String>,
    tag_counts: Option<String>,
}

/// Per-render accumulator for the tags of pages kept by the filter.
///
/// One instance per render request - never share a store across unrelated
/// renders, or tags leak between them. A fresh store starts empty.
///
/// # Thread Safety
///
/// Uses `RwLock` so a host driving the render from a worker pool can share
/// one render's store across threads. No locking is exposed to callers.
#[derive(Debug, Default)]
pub struct RenderData {
    all_tags: RwLock<TagSet>,
    /// Cached JSON output. Invalidated on any write operation.
    json_cache: RwLock<JsonCache>,
}

impl RenderData {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all accumulated tags.
    ///
    /// Call this when reusing a store at the start of a render.
    pub fn clear(&self) {
        self.all_tags.write().clear();
        *self.json_cache.write() = JsonCache::default();
    }

    /// Append tags to the accumulated sequence.
    ///
    /// Order is preserved and duplicates are retained - the sequence mirrors
    /// the tags of kept pages in collection order. Invalidates the JSON
    /// cache since data has changed.
    pub fn append_tags(&self, tags: &[Tag]) {
        if tags.is_empty() {
            return;
        }
        self.all_tags.write().extend(tags.iter().cloned());
        *self.json_cache.write() = JsonCache::default();
    }

    /// Snapshot of the accumulated tag sequence.
    pub fn all_tags(&self) -> TagSet {
        self.all_tags.read().clone()
    }

    /// Frequency view over the accumulated sequence.
    ///
    /// Duplicate retention in the sequence carries the frequency signal;
    /// this derives the counts without deduplicating the stored data.
    pub fn tag_counts(&self) -> TagCounts {
        let tags = self.all_tags.read();
        let mut counts = TagCounts::new();
        for tag in tags.iter() {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Template variables for the rendering stage.
    pub fn template_vars(&self) -> TemplateVars {
        TemplateVars {
            all_tags: self.all_tags(),
        }
    }

    /// Serialize the tag sequence to JSON with caching.
    ///
    /// First call generates JSON, subsequent calls return the cached value.
    /// Cache is invalidated by `append_tags()` or `clear()`.
    pub fn all_tags_to_json(&self) -> String {
        // Fast path: check if cached (read lock only)
        {
            let cache = self.json_cache.read();
            if let Some(ref json) = cache.all_tags {
                return json.clone();
            }
        }

        // Slow path: generate and cache (upgrade to write lock)
        let mut cache = self.json_cache.write();
        // Double-check after acquiring write lock
        if let Some(ref json) = cache.all_tags {
            return json.clone();
        }

        let tags = self.all_tags();
        let json = serde_json::to_string_pretty(&tags).unwrap_or_else(|_| "[]".to_string());
        cache.all_tags = Some(json.clone());
        json
    }

    /// Serialize the tag frequency view to JSON with caching.
    ///
    /// First call generates JSON, subsequent calls return the cached value.
    /// Cache is invalidated by `append_tags()` or `clear()`.
    pub fn tag_counts_to_json(&self) -> String {
        // Fast path: check if cached (read lock only)
        {
            let cache = self.json_cache.read();
            if let Some(ref json) = cache.tag_counts {
                return json.clone();
            }
        }

        // Slow path: generate and cache (upgrade to write lock)
        let mut cache = self.json_cache.write();
        // Double-check after acquiring write lock
        if let Some(ref json) = cache.tag_counts {
            return json.clone();
        }

        let counts = self.tag_counts();
        let json = serde_json::to_string_pretty(&counts).unwrap_or_else(|_| "{}".to_string());
        cache.tag_counts = Some(json.clone());
        json
    }

    /// Check if the store has any tags.
    pub fn is_empty(&self) -> bool {
        self.all_tags.read().is_empty()
    }

    /// Get the number of accumulated tags (duplicates counted).
    pub fn tag_count(&self) -> usize {
        self.all_tags.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|t| (*t).to_owned()).collect()
    }

    #[test]
    fn test_append_and_snapshot() {
        let data = RenderData::new();
        data.append_tags(&tags(&["news"]));
        data.append_tags(&tags(&["blog", "news"]));

        assert_eq!(data.all_tags(), tags(&["news", "blog", "news"]));
        assert_eq!(data.tag_count(), 3);
    }

    #[test]
    fn test_duplicates_retained_in_order() {
        let data = RenderData::new();
        data.append_tags(&tags(&["b", "a", "b"]));
        assert_eq!(data.all_tags(), tags(&["b", "a", "b"]));
    }

    #[test]
    fn test_tag_counts() {
        let data = RenderData::new();
        data.append_tags(&tags(&["news", "blog", "news"]));

        let counts = data.tag_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["news"], 2);
        assert_eq!(counts["blog"], 1);
    }

    #[test]
    fn test_append_empty_is_noop() {
        let data = RenderData::new();
        data.append_tags(&[]);
        assert!(data.is_empty());
    }

    #[test]
    fn test_clear() {
        let data = RenderData::new();
        data.append_tags(&tags(&["news"]));
        assert!(!data.is_empty());

        data.clear();
        assert!(data.is_empty());
        assert_eq!(data.all_tags_to_json(), "[]");
    }

    #[test]
    fn test_json_stable_across_reads() {
        let data = RenderData::new();
        data.append_tags(&tags(&["news", "blog"]));

        let first = data.all_tags_to_json();
        let second = data.all_tags_to_json();
        assert_eq!(first, second);
        assert!(first.contains("news"));
        assert!(first.contains("blog"));
    }

    #[test]
    fn test_json_cache_invalidated_on_append() {
        let data = RenderData::new();
        data.append_tags(&tags(&["news"]));
        let before = data.all_tags_to_json();

        data.append_tags(&tags(&["blog"]));
        let after = data.all_tags_to_json();

        assert_ne!(before, after);
        assert!(after.contains("blog"));
    }

    #[test]
    fn test_tag_counts_json() {
        let data = RenderData::new();
        data.append_tags(&tags(&["news", "news"]));

        let json = data.tag_counts_to_json();
        assert!(json.contains("\"news\": 2"));
    }

    #[test]
    fn test_empty_store_json() {
        let data = RenderData::new();
        assert_eq!(data.all_tags_to_json(), "[]");
        assert_eq!(data.tag_counts_to_json(), "{}");
    }

    #[test]
    fn test_template_vars() {
        let data = RenderData::new();
        data.append_tags(&tags(&["news", "blog", "news"]));

        let vars = data.template_vars();
        assert_eq!(vars.all_tags, tags(&["news", "blog", "news"]));
    }
}
