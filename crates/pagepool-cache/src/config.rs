//! Cache configuration parameters.

use pagepool_slab::PoolConfig;

use crate::error::CacheError;

/// Configuration for a [`PagedItemCache`](crate::PagedItemCache).
///
/// Validated at construction; immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Number of items materialized per page.
    ///
    /// Default: 100. Must be at least 1. The last page is short when the
    /// total item count is not a multiple of the page size.
    pub page_size: usize,

    /// Configuration of the backing slot pool.
    pub pool: PoolConfig,
}

impl CacheConfig {
    /// Default page size.
    pub const DEFAULT_PAGE_SIZE: usize = 100;

    /// Create a cache config with the given page size and an unbounded pool.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            pool: PoolConfig::default(),
        }
    }

    /// Check that the configuration can produce a usable cache.
    pub fn validate(&self) -> Result<(), CacheError> {
        if self.page_size == 0 {
            return Err(CacheError::InvalidConfig {
                reason: "page_size must be at least 1".into(),
            });
        }
        self.pool.validate()?;
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}
