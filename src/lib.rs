//! Tagsift - tag-based page filtering for static-site pipelines.
//!
//! Pages declare comma-separated tags in their front matter; a page may
//! declare a filter selecting which tagged pages appear in its page list.
//! This crate parses those headers, restricts the page collection handed to
//! the current page's template to the pages whose tags intersect the
//! filter, and accumulates the kept pages' tags for template display (tag
//! lists, tag clouds).
//!
//! The core is three pure functions - [`parse_tags`], [`resolve_filter`],
//! [`filter_pages`] - wired to the host's lifecycle through a per-render
//! [`RenderPass`]:
//!
//! ```
//! use tagsift::{QueryParams, RawMeta, RawPage, RenderPass, TagsConfig};
//!
//! let config = TagsConfig::default();
//! let pass = RenderPass::new(&config, QueryParams::new());
//!
//! let pages = pass.normalize_pages(vec![
//!     RawPage {
//!         url: "/news/".into(),
//!         title: "News".into(),
//!         meta: RawMeta { tags: Some("news".into()), ..Default::default() },
//!     },
//!     RawPage {
//!         url: "/misc/".into(),
//!         title: "Misc".into(),
//!         meta: RawMeta { tags: Some("misc".into()), ..Default::default() },
//!     },
//! ]);
//!
//! let current = pass.meta_parsed(&RawMeta {
//!     filter: Some("news".into()),
//!     ..Default::default()
//! });
//!
//! let filtered = pass.pages_loaded(pages, Some(&current));
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(pass.page_rendering().all_tags, vec!["news".to_string()]);
//! ```
//!
//! Filtering never adds or reorders pages, an empty filter passes the
//! collection through unchanged, and each `RenderPass` owns its own tag
//! registry so nothing leaks between render requests.

pub mod config;
pub mod data;
pub mod filter;
pub mod meta;
pub mod pipeline;
pub mod query;
pub mod tags;
pub mod utils;

pub use config::{ConfigError, TagsConfig};
pub use data::{Page, RawPage, RenderData, TagCounts, TemplateVars};
pub use filter::{FilterOutcome, filter_pages};
pub use meta::{PageMeta, RawMeta, register_headers};
pub use pipeline::RenderPass;
pub use query::QueryParams;
pub use tags::{Tag, TagSet, parse_tags, resolve_filter};
