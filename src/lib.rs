// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # pagewise
//!
//! Page windows over data sources of unknown shape: in-memory lists, plain
//! query builders, query-sets with native paging and relation managers.
//!
//! ## Features
//!
//! - **One slice per request**: count the source, clamp the requested page, fetch one page
//! - **Request-driven**: page and page size come from the request's query string
//! - **Many paginators per page**: every instance reads its own `Name_Id` parameter
//! - **Renderer helpers**: next/prev checks, neighbor page windows, link query strings
//!
//! ## Quick Start
//!
//! ```rust
//! use pagewise::{Paginator, PaginatorConfig, RequestContext, Source};
//!
//! # fn main() -> pagewise::Result<()> {
//! let request = RequestContext::from_uri("/orders?sort=date&Pager_1=3")?;
//! let config = PaginatorConfig::new()
//!     .with_id(pagewise::PaginatorId::from_raw(1))
//!     .with_page_size(10);
//!
//! let mut paginator = Paginator::new(Source::array((1..=25).collect::<Vec<u32>>()), config, request);
//! let page = paginator.paginate()?.to_vec();
//!
//! assert_eq!(page, vec![21, 22, 23, 24, 25]);
//! assert_eq!(paginator.pages_count()?, 3);
//! assert!(!paginator.has_next_page()?);
//! assert_eq!(paginator.iter_prev_page(3)?, vec![1, 2]);
//! assert_eq!(paginator.url(2), "?sort=date&Pager_1=2");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Paginator                           │
//! │  page_size()  page()  paginate()  pages_count()  url(page)   │
//! └──────────────────────────────────────────────────────────────┘
//!            │                    │                    │
//! ┌──────────┴───────┐ ┌──────────┴─────────┐ ┌────────┴─────────┐
//! │      Source      │ │   RequestContext   │ │  PaginatorConfig │
//! ├──────────────────┤ ├────────────────────┤ ├──────────────────┤
//! │ Array            │ │ path               │ │ page, page_size  │
//! │ Query            │ │ ordered params     │ │ default size     │
//! │ QuerySet         │ │ link_with(k, v)    │ │ size options     │
//! │ Relation         │ │                    │ │ key, id          │
//! └──────────────────┘ └────────────────────┘ └──────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document the remaining accessors and error variants before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and defaults
pub mod types;

/// Paginator configuration
pub mod config;

/// Paginator identities
pub mod identity;

/// Request context snapshot
pub mod request;

/// Source variants and collaborator traits
pub mod source;

/// Paginator and page arithmetic
pub mod pagination;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::PaginatorConfig;
pub use identity::{IdSequence, PaginatorId};
pub use pagination::{PageLink, PageSizeLink, PageSummary, Paginator};
pub use request::RequestContext;
pub use source::{
    MemoryQuery, MemoryQuerySet, MemoryRelation, Query, QuerySet, RelationManager, Source,
    SourceKind,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
