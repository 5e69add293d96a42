//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [meta] Section Defaults
// ============================================================================

pub mod meta {
    pub fn tags() -> String {
        "Tags".into()
    }

    pub fn filter() -> String {
        "Filter".into()
    }

    pub fn filter_get_param() -> String {
        "FilterGetParam".into()
    }
}
