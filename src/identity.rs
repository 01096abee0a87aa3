//! Paginator identities
//!
//! Every paginator carries an id so that several paginators rendered on one
//! page read and write distinct request parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_SEQUENCE: IdSequence = IdSequence::new();

/// Identity of a single paginator instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaginatorId(u64);

impl PaginatorId {
    /// Allocate the next id from the process-wide sequence
    pub fn next() -> Self {
        GLOBAL_SEQUENCE.next_id()
    }

    /// Wrap a caller-supplied id
    ///
    /// Uniqueness is the caller's responsibility.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PaginatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id allocator
///
/// The process-wide sequence backs [`PaginatorId::next`]. Owning a separate
/// sequence gives deterministic ids, e.g. one sequence per rendered page.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Create a sequence whose first id is 1
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a sequence whose first id is `first`
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Allocate the next id
    pub fn next_id(&self) -> PaginatorId {
        PaginatorId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
