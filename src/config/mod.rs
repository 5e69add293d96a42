//! Extension configuration.
//!
//! # Sections
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[meta]`  | Front-matter header names read by the extension  |
//! | `[query]` | Query-string-sourced filter behavior             |
//!
//! # Example
//!
//! ```toml
//! [meta]
//! tags = "Tags"
//! filter = "Filter"
//! filter_get_param = "FilterGetParam"
//!
//! [query]
//! enable = true
//! ```
//!
//! Hosts typically embed this as a section of their own site configuration
//! and hand the extension its subtree; `from_path` exists for standalone
//! files.

mod defaults;
mod error;

pub use error::ConfigError;

use anyhow::{Result, anyhow, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration for the tag filtering extension.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct TagsConfig {
    /// Front-matter header names
    #[serde(default)]
    pub meta: MetaConfig,

    /// Query-string filter settings
    #[serde(default)]
    pub query: QueryConfig,
}

impl TagsConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TagsConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Validate configured values.
    ///
    /// Header names must be non-empty and distinct, since they key the
    /// host's metadata parser.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("meta.tags", &self.meta.tags),
            ("meta.filter", &self.meta.filter),
            ("meta.filter_get_param", &self.meta.filter_get_param),
        ];

        for (field, name) in &names {
            if name.trim().is_empty() {
                bail!(ConfigError::Validation(format!(
                    "`{field}` must not be empty"
                )));
            }
        }

        for (i, (field_a, name_a)) in names.iter().enumerate() {
            for (field_b, name_b) in &names[i + 1..] {
                if name_a == name_b {
                    return Err(anyhow!(ConfigError::Validation(format!(
                        "`{field_a}` and `{field_b}` share the header name `{name_a}`"
                    ))));
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// [meta] Section
// ============================================================================

/// `[meta]` section - front-matter header names the extension registers
/// with the host's metadata parser and reads back from parsed metadata.
///
/// # Example
/// ```toml
/// [meta]
/// tags = "Topics"
/// filter = "Show"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct MetaConfig {
    /// Header carrying a page's comma-separated tags.
    #[serde(default = "defaults::meta::tags")]
    #[educe(Default = defaults::meta::tags())]
    pub tags: String,

    /// Header carrying a page's comma-separated filter.
    #[serde(default = "defaults::meta::filter")]
    #[educe(Default = defaults::meta::filter())]
    pub filter: String,

    /// Header naming a query parameter to also source filter tags from.
    #[serde(default = "defaults::meta::filter_get_param")]
    #[educe(Default = defaults::meta::filter_get_param())]
    pub filter_get_param: String,
}

// ============================================================================
// [query] Section
// ============================================================================

/// `[query]` section - query-string-sourced filter behavior.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    /// Allow filter tags sourced from a request query parameter.
    /// When disabled, page-declared filters still apply.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,
}
