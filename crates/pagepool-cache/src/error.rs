//! Cache-specific error types.

use std::error::Error;
use std::fmt;

use pagepool_core::{InitError, PageIndex};
use pagepool_slab::PoolError;

/// Errors that can occur during cache operations.
///
/// Bounds errors are raised before the pool is touched. Pool and
/// initializer failures abort the page load in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// A global index at or past the end of the item space.
    OutOfRange {
        /// The requested global index.
        index: usize,
        /// Total number of items reported by the source.
        total: usize,
    },
    /// A page index at or past the last valid page.
    PageOutOfRange {
        /// The requested page.
        page: PageIndex,
        /// Number of valid pages.
        page_count: usize,
    },
    /// The backing pool could not provide a slot.
    Pool(PoolError),
    /// The item source failed to populate a slot.
    InitFailed(InitError),
    /// The cache configuration is invalid.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// A thread panicked while holding the shared cache lock.
    Poisoned,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, total } => {
                write!(f, "item index {index} out of range: {total} items")
            }
            Self::PageOutOfRange { page, page_count } => {
                write!(f, "page {page} out of range: {page_count} pages")
            }
            Self::Pool(e) => write!(f, "pool error: {e}"),
            Self::InitFailed(e) => write!(f, "page load failed: {e}"),
            Self::InvalidConfig { reason } => write!(f, "invalid cache config: {reason}"),
            Self::Poisoned => write!(f, "shared cache lock poisoned"),
        }
    }
}

impl Error for CacheError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pool(e) => Some(e),
            Self::InitFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PoolError> for CacheError {
    fn from(e: PoolError) -> Self {
        Self::Pool(e)
    }
}

impl From<InitError> for CacheError {
    fn from(e: InitError) -> Self {
        Self::InitFailed(e)
    }
}
