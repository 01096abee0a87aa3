//! Pagination view types
//!
//! Renderer-facing snapshots of a paginator, so templates never need to
//! know what kind of source was paginated.

use serde::Serialize;

/// Link to a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Page number
    pub page: u32,
    /// Query string selecting the page
    pub url: String,
}

/// Link selecting a page size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSizeLink {
    /// Page size
    pub size: u32,
    /// Query string selecting the size
    pub url: String,
    /// Whether this size is the one in effect
    pub selected: bool,
}

/// Everything a renderer needs to draw pagination controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// Request parameter holding the page number
    pub name: String,
    /// Request parameter holding the page size
    pub page_size_key: String,
    /// Current 1-based page
    pub current_page: u32,
    /// Total number of pages
    pub pages_count: u64,
    /// Total number of records, when known
    pub total: Option<u64>,
    /// Records per page
    pub page_size: u32,
    /// Is there a page after the current one?
    pub has_next: bool,
    /// Is there a page before the current one?
    pub has_prev: bool,
    /// Window of pages before the current one
    pub prev_pages: Vec<PageLink>,
    /// Window of pages after the current one
    pub next_pages: Vec<PageLink>,
    /// Selectable page sizes
    pub page_sizes: Vec<PageSizeLink>,
}
