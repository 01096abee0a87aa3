//! Pagination module
//!
//! Supports: arrays, plain queries, query-sets, relation managers
//!
//! # Overview
//!
//! A [`Paginator`] resolves the page number and page size from a request,
//! slices its source exactly once and exposes the navigation helpers a
//! renderer needs: page counts, next/prev checks, neighbor page windows and
//! link query strings.

mod paginator;
mod types;
pub mod window;

pub use paginator::Paginator;
pub use types::{PageLink, PageSizeLink, PageSummary};
