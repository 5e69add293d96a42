//! Page metadata normalization.
//!
//! `RawMeta` is the string view of the extension's front-matter fields as
//! the host's metadata parser produced them; `PageMeta` is the normalized
//! view with materialized tag sets. Every page's metadata is normalized
//! before the filter stage runs.

use crate::config::TagsConfig;
use crate::query::QueryParams;
use crate::tags::{TagSet, parse_tags, resolve_filter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw front-matter fields read by this extension.
///
/// All fields are optional; absent or empty values normalize to empty tag
/// sets rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeta {
    /// Comma-separated tags declared by the page.
    #[serde(default)]
    pub tags: Option<String>,

    /// Comma-separated filter declared by the page.
    #[serde(default)]
    pub filter: Option<String>,

    /// Name of a query parameter to also source filter tags from.
    #[serde(default)]
    pub filter_get_param: Option<String>,
}

/// Normalized page metadata: tag sets are materialized, never raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Tags declared by the page, split but untrimmed.
    pub tags: TagSet,

    /// Resolved filter set (URL-sourced tags first, then page-declared),
    /// each tag trimmed.
    pub filter: TagSet,
}

impl PageMeta {
    /// Normalize raw front-matter fields against the request's query
    /// parameters.
    pub fn from_raw(raw: &RawMeta, query: &QueryParams) -> Self {
        Self {
            tags: parse_tags(raw.tags.as_deref()),
            filter: resolve_filter(
                raw.filter.as_deref(),
                raw.filter_get_param.as_deref(),
                query,
            ),
        }
    }
}

/// Register the extension's front-matter header names with the host's
/// metadata parser.
///
/// Keys are the field identifiers this crate reads back from the parsed
/// metadata; values are the header names expected in page front matter
/// (configurable via `[meta]`).
pub fn register_headers(headers: &mut BTreeMap<String, String>, config: &TagsConfig) {
    headers.insert("tags".to_owned(), config.meta.tags.clone());
    headers.insert("filter".to_owned(), config.meta.filter.clone());
    headers.insert(
        "filter_get_param".to_owned(),
        config.meta.filter_get_param.clone(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_materializes_tags() {
        let raw = RawMeta {
            tags: Some("news,blog".to_owned()),
            ..Default::default()
        };
        let meta = PageMeta::from_raw(&raw, &QueryParams::new());

        assert_eq!(meta.tags, vec!["news", "blog"]);
        assert!(meta.filter.is_empty());
    }

    #[test]
    fn test_from_raw_empty_meta() {
        let meta = PageMeta::from_raw(&RawMeta::default(), &QueryParams::new());
        assert!(meta.tags.is_empty());
        assert!(meta.filter.is_empty());
    }

    #[test]
    fn test_from_raw_tags_untrimmed_filter_trimmed() {
        let raw = RawMeta {
            tags: Some("a, b".to_owned()),
            filter: Some("a, b".to_owned()),
            ..Default::default()
        };
        let meta = PageMeta::from_raw(&raw, &QueryParams::new());

        assert_eq!(meta.tags, vec!["a", " b"]);
        assert_eq!(meta.filter, vec!["a", "b"]);
    }

    #[test]
    fn test_from_raw_query_sourced_filter() {
        let raw = RawMeta {
            filter: Some("z".to_owned()),
            filter_get_param: Some("f".to_owned()),
            ..Default::default()
        };
        let query = QueryParams::from_pairs([("f", "x,y")]);
        let meta = PageMeta::from_raw(&raw, &query);

        assert_eq!(meta.filter, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_from_raw_deserializes_from_toml() {
        let raw: RawMeta = toml::from_str(
            r#"
            tags = "news, blog"
            filter = "news"
        "#,
        )
        .unwrap();

        assert_eq!(raw.tags.as_deref(), Some("news, blog"));
        assert_eq!(raw.filter.as_deref(), Some("news"));
        assert!(raw.filter_get_param.is_none());
    }

    #[test]
    fn test_register_headers_defaults() {
        let config = TagsConfig::default();
        let mut headers = BTreeMap::new();
        register_headers(&mut headers, &config);

        assert_eq!(headers["tags"], "Tags");
        assert_eq!(headers["filter"], "Filter");
        assert_eq!(headers["filter_get_param"], "FilterGetParam");
    }

    #[test]
    fn test_register_headers_configured_names() {
        let config = TagsConfig::from_str(
            r#"
            [meta]
            tags = "Topics"
        "#,
        )
        .unwrap();
        let mut headers = BTreeMap::new();
        register_headers(&mut headers, &config);

        assert_eq!(headers["tags"], "Topics");
        assert_eq!(headers["filter"], "Filter");
    }
}
