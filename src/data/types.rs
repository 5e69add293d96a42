//! Data types handed between the host pipeline and the template stage.

use crate::meta::{PageMeta, RawMeta};
use crate::tags::{Tag, TagSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A page before normalization, as handed over by the host.
///
/// Carries the host-visible identity fields plus the raw front-matter
/// strings this extension reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPage {
    /// Page URL path (e.g. "/posts/hello-world/")
    pub url: String,

    /// Page title (from metadata)
    #[serde(default)]
    pub title: String,

    /// Raw front-matter fields
    #[serde(default)]
    pub meta: RawMeta,
}

/// This extension's view of a host page, with normalized metadata.
///
/// The host adapter converts its own page type into this before the filter
/// stage and maps the kept subset back afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    /// Page URL path (e.g. "/posts/hello-world/")
    pub url: String,

    /// Page title (from metadata)
    pub title: String,

    /// Normalized tag metadata
    pub meta: PageMeta,
}

/// Tag frequency view, sorted by tag name.
///
/// Derived from the accumulated tag sequence; duplicate retention in the
/// sequence is what carries the frequency signal.
pub type TagCounts = BTreeMap<Tag, usize>;

/// Template-visible variables produced at render time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateVars {
    /// Every tag of every page kept by the filter, duplicates retained.
    pub all_tags: TagSet,
}
