//! Per-render data management for the template stage.
//!
//! This module collects the tags of pages kept by the filter and exposes
//! them to the host's template engine, both as typed values and as JSON.
//!
//! # Architecture
//!
//! ```text
//! normalize (stage 1)          filter (stage 2)          render (stage 3)
//! ┌──────────────────┐     ┌──────────────────────┐     ┌───────────────┐
//! │ RawPage → Page   │ ──► │ filter_pages()       │ ──► │ TemplateVars  │
//! │ (tags/filter     │     │ kept pages' tags ──► │     │ { all_tags }  │
//! │  materialized)   │     │ RenderData.append    │     │ + JSON views  │
//! └──────────────────┘     └──────────────────────┘     └───────────────┘
//! ```
//!
//! `RenderData` lives for exactly one render request. Each request gets a
//! fresh instance, so accumulated tags never leak between renders.

mod store;
mod types;

pub use store::RenderData;
pub use types::{Page, RawPage, TagCounts, TemplateVars};
