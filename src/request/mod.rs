//! Request context module
//!
//! An immutable snapshot of the current request: its path and ordered query
//! parameters. Paginators read page and page size overrides from it and use
//! it as the base for link URLs.

mod context;

pub use context::RequestContext;
