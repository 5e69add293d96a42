//! Query-parameter lookup for URL-sourced filters.
//!
//! Hosts hand over the request's query parameters either as explicit pairs
//! or as a raw query string. The extension only ever reads them.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Request query parameters.
///
/// Later occurrences of a key overwrite earlier ones, matching typical
/// server-side GET handling.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    /// An empty parameter set (e.g. for build-time renders with no request).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a raw URL query string (`a=b&tags=x%2Cy`).
    ///
    /// Percent-escapes are decoded; undecodable escapes keep the raw text.
    /// A segment without `=` becomes a key with an empty value.
    pub fn from_query_string(raw: &str) -> Self {
        let params = raw
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                (decode(key), decode(value))
            })
            .collect();

        Self { params }
    }

    /// Whether the parameter is present (even with an empty value).
    pub fn has(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Get a parameter value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Whether no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Decode percent-escapes, keeping the raw text when decoding fails.
fn decode(s: &str) -> String {
    urlencoding::decode(s).map_or_else(|_| s.to_owned(), Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_string_basic() {
        let query = QueryParams::from_query_string("a=1&b=2");
        assert_eq!(query.get("a"), Some("1"));
        assert_eq!(query.get("b"), Some("2"));
        assert!(!query.has("c"));
    }

    #[test]
    fn test_from_query_string_percent_decoding() {
        let query = QueryParams::from_query_string("f=x%2Cy&b=1");
        assert_eq!(query.get("f"), Some("x,y"));
        assert_eq!(query.get("b"), Some("1"));
    }

    #[test]
    fn test_from_query_string_key_without_value() {
        let query = QueryParams::from_query_string("flag&x=1");
        assert!(query.has("flag"));
        assert_eq!(query.get("flag"), Some(""));
    }

    #[test]
    fn test_from_query_string_empty() {
        let query = QueryParams::from_query_string("");
        assert!(query.is_empty());
    }

    #[test]
    fn test_from_query_string_invalid_escape_kept_raw() {
        let query = QueryParams::from_query_string("f=%ZZ");
        assert_eq!(query.get("f"), Some("%ZZ"));
    }

    #[test]
    fn test_from_query_string_last_occurrence_wins() {
        let query = QueryParams::from_query_string("f=a&f=b");
        assert_eq!(query.get("f"), Some("b"));
    }

    #[test]
    fn test_from_pairs() {
        let query = QueryParams::from_pairs([("f", "x,y")]);
        assert!(query.has("f"));
        assert_eq!(query.get("f"), Some("x,y"));
        assert!(query.get("missing").is_none());
    }

    #[test]
    fn test_decoded_value_in_space() {
        let query = QueryParams::from_query_string("f=hello%20world");
        assert_eq!(query.get("f"), Some("hello world"));
    }
}
