//! Strongly-typed identifiers for pools and pages.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`PoolId`] allocation.
static POOL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a slot pool.
///
/// Allocated from a monotonic atomic counter via [`PoolId::next`]. Every
/// slot handle carries the id of the pool that issued it, so a handle
/// presented to a different pool is recognised as foreign without any
/// address arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolId(u64);

impl PoolId {
    /// Allocate a fresh, unique pool ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(POOL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value, for logging.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a page within the cache's logical item space.
///
/// Page `n` covers the half-open global index range
/// `[n * page_size, (n + 1) * page_size)`, clipped to the total item count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageIndex(pub usize);

impl PageIndex {
    /// The page that owns `index` for the given page size.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn containing(index: usize, page_size: usize) -> Self {
        Self(index / page_size)
    }

    /// First global index covered by this page.
    ///
    /// Saturates instead of overflowing for absurd page numbers, which
    /// then fail the caller's bounds check.
    pub fn first_index(self, page_size: usize) -> usize {
        self.0.saturating_mul(page_size)
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for PageIndex {
    fn from(v: usize) -> Self {
        Self(v)
    }
}
