//! Source module
//!
//! Supports: in-memory arrays, plain queries, query-sets, relation managers
//!
//! # Overview
//!
//! A [`Source`] is a closed set of variants. Each variant wraps the
//! capability the paginator needs to count and slice it, so dispatch is a
//! plain `match` rather than runtime type checks.

mod memory;
mod types;

pub use memory::{MemoryQuery, MemoryQuerySet, MemoryRelation};
pub use types::{Query, QuerySet, RelationManager, Source, SourceKind};
