//! pagepool: a fixed-size object pool and a single-page item cache built on it.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the pagepool sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use pagepool::prelude::*;
//!
//! // A catalogue of squares, materialized ten at a time.
//! struct Squares;
//! impl ItemSource for Squares {
//!     type Item = u64;
//!     fn total_items(&self) -> usize { 95 }
//!     fn init_item(&mut self, slot: &mut u64, index: usize) -> Result<(), InitError> {
//!         *slot = (index * index) as u64;
//!         Ok(())
//!     }
//! }
//!
//! let mut cache: PagedItemCache<Squares> =
//!     PagedItemCache::new(Squares, CacheConfig::new(10)).unwrap();
//! assert_eq!(*cache.get_item(12).unwrap(), 144);
//! assert_eq!(cache.current_page(), Some(PageIndex(1)));
//! assert_eq!(cache.active_len(), 10);
//!
//! // The last page is short.
//! cache.get_item(94).unwrap();
//! assert_eq!(cache.active_len(), 5);
//! assert!(matches!(cache.get_item(95), Err(CacheError::OutOfRange { .. })));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pagepool-core` | Ids, the `ItemSource` trait, `InitError` |
//! | [`slab`] | `pagepool-slab` | `MemoryPool`, `SlotHandle`, `PoolConfig`, `PoolError` |
//! | [`cache`] | `pagepool-cache` | `PagedItemCache`, `SharedItemCache`, `CacheConfig`, `CacheError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core ids and the item source trait (`pagepool-core`).
pub use pagepool_core as types;

/// Block pool and slot handles (`pagepool-slab`).
pub use pagepool_slab as slab;

/// Paged item cache (`pagepool-cache`).
pub use pagepool_cache as cache;

/// Common imports for typical pagepool usage.
///
/// ```rust
/// use pagepool::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use pagepool_core::{InitError, ItemSource, PageIndex, PoolId};

    // Pool
    pub use pagepool_slab::{MemoryPool, PoolConfig, PoolError, SlotHandle};

    // Cache
    pub use pagepool_cache::{CacheConfig, CacheError, PagedItemCache, SharedItemCache};
}
