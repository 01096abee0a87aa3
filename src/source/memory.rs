//! In-memory source adapters
//!
//! Implementations of the collaborator traits over a shared `Vec`. Useful as
//! reference adapters and as fixtures when the real query engine is not at
//! hand.

use super::types::{Query, QuerySet, RelationManager};
use crate::error::Result;
use std::sync::Arc;
use tracing::trace;

// ============================================================================
// Query
// ============================================================================

/// Query builder over an in-memory list
#[derive(Debug, Clone)]
pub struct MemoryQuery<T> {
    items: Arc<Vec<T>>,
    limit: Option<u64>,
    offset: u64,
}

impl<T> MemoryQuery<T> {
    /// Create an unrestricted query over `items`
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
            limit: None,
            offset: 0,
        }
    }

    /// Current limit, if any
    pub fn current_limit(&self) -> Option<u64> {
        self.limit
    }

    /// Current offset
    pub fn current_offset(&self) -> u64 {
        self.offset
    }

    fn window(&self) -> impl Iterator<Item = &T> {
        let take = self.limit.map_or(usize::MAX, |l| l as usize);
        self.items.iter().skip(self.offset as usize).take(take)
    }
}

impl<T: Clone + 'static> Query for MemoryQuery<T> {
    type Item = T;

    fn count(&self) -> Result<u64> {
        Ok(self.window().count() as u64)
    }

    fn limit(&self, limit: u64) -> Box<dyn Query<Item = T>> {
        Box::new(Self {
            limit: Some(limit),
            ..self.clone()
        })
    }

    fn offset(&self, offset: u64) -> Box<dyn Query<Item = T>> {
        Box::new(Self {
            offset,
            ..self.clone()
        })
    }

    fn all(&self) -> Result<Vec<T>> {
        trace!(limit = ?self.limit, offset = self.offset, "Executing in-memory query");
        Ok(self.window().cloned().collect())
    }
}

// ============================================================================
// QuerySet
// ============================================================================

/// Query-set over an in-memory list of one model
#[derive(Debug, Clone)]
pub struct MemoryQuerySet<T> {
    model: String,
    items: Arc<Vec<T>>,
    page: Option<(u32, u32)>,
}

impl<T> MemoryQuerySet<T> {
    /// Create a query-set of `model` records
    pub fn new(model: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            model: model.into(),
            items: Arc::new(items),
            page: None,
        }
    }

    fn window(&self) -> impl Iterator<Item = &T> {
        let (skip, take) = match self.page {
            Some((page, size)) => (
                page.saturating_sub(1) as usize * size as usize,
                size as usize,
            ),
            None => (0, usize::MAX),
        };
        self.items.iter().skip(skip).take(take)
    }
}

impl<T: Clone + 'static> QuerySet for MemoryQuerySet<T> {
    type Item = T;

    fn model_name(&self) -> &str {
        &self.model
    }

    fn count(&self) -> Result<u64> {
        Ok(self.window().count() as u64)
    }

    fn paginate(&self, page: u32, page_size: u32) -> Box<dyn QuerySet<Item = T>> {
        Box::new(Self {
            page: Some((page, page_size)),
            ..self.clone()
        })
    }

    fn all(&self) -> Result<Vec<T>> {
        trace!(model = %self.model, page = ?self.page, "Executing in-memory query-set");
        Ok(self.window().cloned().collect())
    }
}

// ============================================================================
// Relation
// ============================================================================

/// Relation manager resolving to an in-memory query-set
#[derive(Debug, Clone)]
pub struct MemoryRelation<T> {
    related: MemoryQuerySet<T>,
}

impl<T> MemoryRelation<T> {
    /// Create a relation over `related` records of `model`
    pub fn new(model: impl Into<String>, related: Vec<T>) -> Self {
        Self {
            related: MemoryQuerySet::new(model, related),
        }
    }
}

impl<T: Clone + 'static> RelationManager for MemoryRelation<T> {
    type Item = T;

    fn query_set(&self) -> Box<dyn QuerySet<Item = T>> {
        Box::new(self.related.clone())
    }
}
