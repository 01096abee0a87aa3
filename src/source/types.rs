//! Source types and collaborator traits
//!
//! Defines the capabilities a paginator needs from each kind of source.

use crate::error::Result;
use crate::types::JsonValue;
use serde::Serialize;
use std::fmt;

/// Chainable query builder with count/limit/offset support
///
/// Builder methods return a new query and leave `self` untouched.
pub trait Query {
    /// Record type produced by the query
    type Item;

    /// Total number of records matched by the query
    fn count(&self) -> Result<u64>;

    /// Restrict the query to at most `limit` records
    fn limit(&self, limit: u64) -> Box<dyn Query<Item = Self::Item>>;

    /// Skip the first `offset` records
    fn offset(&self, offset: u64) -> Box<dyn Query<Item = Self::Item>>;

    /// Execute the query
    fn all(&self) -> Result<Vec<Self::Item>>;
}

/// Lazily evaluated query with native page support
pub trait QuerySet {
    /// Record type produced by the query-set
    type Item;

    /// Short name of the model the query-set yields, e.g. `User`
    fn model_name(&self) -> &str;

    /// Total number of records in the query-set
    fn count(&self) -> Result<u64>;

    /// Narrow the query-set to one 1-based page
    fn paginate(&self, page: u32, page_size: u32) -> Box<dyn QuerySet<Item = Self::Item>>;

    /// Execute the query-set
    fn all(&self) -> Result<Vec<Self::Item>>;
}

/// Has-many or many-to-many association wrapper
pub trait RelationManager {
    /// Record type on the far side of the relation
    type Item;

    /// Query-set over the related records
    fn query_set(&self) -> Box<dyn QuerySet<Item = Self::Item>>;
}

/// Classification of a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Array,
    Query,
    QuerySet,
    Relation,
    Unclassified,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Array => "array",
            SourceKind::Query => "query",
            SourceKind::QuerySet => "query_set",
            SourceKind::Relation => "relation",
            SourceKind::Unclassified => "unclassified",
        };
        f.write_str(name)
    }
}

/// The underlying collection or query being paginated
pub enum Source<T> {
    /// Finite in-memory ordered sequence
    Array(Vec<T>),
    /// Plain query builder
    Query(Box<dyn Query<Item = T>>),
    /// Query-set with native paging
    QuerySet(Box<dyn QuerySet<Item = T>>),
    /// Association that resolves to a query-set
    Relation(Box<dyn RelationManager<Item = T>>),
    /// A value that matched none of the above
    Unclassified {
        /// Description of what was found instead
        kind: String,
    },
}

impl<T> Source<T> {
    /// Wrap an in-memory sequence
    pub fn array(items: Vec<T>) -> Self {
        Self::Array(items)
    }

    /// Wrap a query builder
    pub fn query(query: impl Query<Item = T> + 'static) -> Self {
        Self::Query(Box::new(query))
    }

    /// Wrap a query-set
    pub fn query_set(query_set: impl QuerySet<Item = T> + 'static) -> Self {
        Self::QuerySet(Box::new(query_set))
    }

    /// Wrap a relation manager
    pub fn relation(relation: impl RelationManager<Item = T> + 'static) -> Self {
        Self::Relation(Box::new(relation))
    }

    /// Mark a value that could not be classified
    pub fn unclassified(kind: impl Into<String>) -> Self {
        Self::Unclassified { kind: kind.into() }
    }

    /// Classification of this source
    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Array(_) => SourceKind::Array,
            Source::Query(_) => SourceKind::Query,
            Source::QuerySet(_) => SourceKind::QuerySet,
            Source::Relation(_) => SourceKind::Relation,
            Source::Unclassified { .. } => SourceKind::Unclassified,
        }
    }

    /// Model name for query-set sources
    pub fn model_name(&self) -> Option<&str> {
        match self {
            Source::QuerySet(qs) => Some(qs.model_name()),
            _ => None,
        }
    }
}

impl Source<JsonValue> {
    /// Classify a JSON value: arrays paginate, everything else is unclassified
    pub fn from_json(value: JsonValue) -> Self {
        match value {
            JsonValue::Array(items) => Self::Array(items),
            JsonValue::Null => Self::unclassified("null"),
            JsonValue::Bool(_) => Self::unclassified("bool"),
            JsonValue::Number(_) => Self::unclassified("number"),
            JsonValue::String(_) => Self::unclassified("string"),
            JsonValue::Object(_) => Self::unclassified("object"),
        }
    }
}

impl<T> From<Vec<T>> for Source<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items)
    }
}

impl<T> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Array(items) => f.debug_struct("Array").field("len", &items.len()).finish(),
            Source::QuerySet(qs) => f
                .debug_struct("QuerySet")
                .field("model", &qs.model_name())
                .finish(),
            Source::Unclassified { kind } => {
                f.debug_struct("Unclassified").field("kind", kind).finish()
            }
            other => write!(f, "{}", other.kind()),
        }
    }
}
