//! Per-render lifecycle adapter.
//!
//! The host pipeline creates one [`RenderPass`] per page-render request and
//! calls the hooks at its own lifecycle points:
//!
//! | Hook | Host lifecycle point |
//! |------|----------------------|
//! | [`RenderPass::meta_parsed`] | a page's front matter was parsed |
//! | [`RenderPass::normalize_pages`] | the full collection was loaded |
//! | [`RenderPass::pages_loaded`] | the collection is about to be handed to the current page's template |
//! | [`RenderPass::page_rendering`] | template variables are being assembled |
//!
//! Each pass owns a fresh [`RenderData`], so accumulated tags never leak
//! between render requests. Previous/next page references of the host are
//! simply not consulted and pass through untouched.

use crate::config::TagsConfig;
use crate::data::{Page, RawPage, RenderData, TemplateVars};
use crate::filter::filter_pages;
use crate::log;
use crate::meta::{PageMeta, RawMeta};
use crate::query::QueryParams;
use rayon::prelude::*;

/// One page-render request's pass through the extension.
pub struct RenderPass {
    query: QueryParams,
    data: RenderData,
}

impl RenderPass {
    /// Start a pass for one render request.
    ///
    /// `query` carries the request's query parameters; it is ignored when
    /// `[query].enable` is off. Build-time renders with no request pass
    /// `QueryParams::new()`.
    pub fn new(config: &TagsConfig, query: QueryParams) -> Self {
        let query = if config.query.enable {
            query
        } else {
            QueryParams::new()
        };

        Self {
            query,
            data: RenderData::new(),
        }
    }

    /// Stage 1, single page: materialize tag sets from raw front matter.
    pub fn meta_parsed(&self, raw: &RawMeta) -> PageMeta {
        PageMeta::from_raw(raw, &self.query)
    }

    /// Stage 1, whole collection: normalize every page's raw metadata.
    ///
    /// Pages are processed in parallel; collection order is unaffected.
    pub fn normalize_pages(&self, pages: Vec<RawPage>) -> Vec<Page> {
        pages
            .into_par_iter()
            .map(|raw| Page {
                meta: PageMeta::from_raw(&raw.meta, &self.query),
                url: raw.url,
                title: raw.title,
            })
            .collect()
    }

    /// Stage 2: restrict the collection to pages matching the current
    /// page's filter.
    ///
    /// Without a current page, or with an empty filter, the collection
    /// passes through unchanged and nothing is accumulated. Otherwise the
    /// kept pages' tags are fed into this pass's registry.
    pub fn pages_loaded(&self, pages: Vec<Page>, current: Option<&PageMeta>) -> Vec<Page> {
        let Some(filter) = current.map(|meta| &meta.filter).filter(|f| !f.is_empty()) else {
            return pages;
        };

        let total = pages.len();
        let outcome = filter_pages(pages, filter);
        self.data.append_tags(&outcome.all_tags);

        log!("filter"; "kept {} of {} pages", outcome.pages.len(), total);
        outcome.pages
    }

    /// Stage 3: template variables for the rendering stage.
    pub fn page_rendering(&self) -> TemplateVars {
        self.data.template_vars()
    }

    /// Read-only access to this pass's accumulator (e.g. for JSON export
    /// or tag counts).
    pub fn data(&self) -> &RenderData {
        &self.data
    }
}
