//! Common types used throughout pagewise
//!
//! Shared type aliases and defaults used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Ordered query-string pairs, as they appear in the request
pub type QueryPairs = Vec<(String, String)>;

// ============================================================================
// Defaults
// ============================================================================

/// Page size used when neither the config nor the request provides one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page sizes offered to renderers by default
pub const DEFAULT_PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Name prefix for paginators over sources without a model name
pub const DEFAULT_NAME_BASE: &str = "Pager";

/// Suffix appended to a paginator name to form its page size key
pub const PAGE_SIZE_KEY_SUFFIX: &str = "_PageSize";

/// Width of the prev/next page window used by summaries
pub const DEFAULT_WINDOW: u32 = 3;
