//! Paged item cache over a slot pool.
//!
//! [`PagedItemCache`] windows over a large indexable catalogue supplied by
//! an [`ItemSource`](pagepool_core::ItemSource). Only one page of items is
//! materialized at a time; accessing an index on another page unloads the
//! resident page back to the pool and loads the new one.
//!
//! # Page swap
//!
//! ```text
//! get_item(i)
//! ├── i >= total_items          → CacheError::OutOfRange
//! ├── page(i) == current_page   → return active[i % page_size]
//! └── otherwise
//!     ├── unload: every active handle → MemoryPool::deallocate
//!     └── load:   PageLoad guard
//!         ├── MemoryPool::allocate_mut  (per index)
//!         ├── ItemSource::init_item     (per index)
//!         └── commit → active, current_page
//! ```
//!
//! A failed allocation or initializer drops the guard, which returns every
//! slot acquired for the page; the cache is then left with no page resident.
//!
//! [`SharedItemCache`] wraps the cache in a mutex for callers on several
//! threads, making each page swap a single critical section.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod config;
pub mod error;
mod load;
pub mod shared;

// Public re-exports for the primary API surface.
pub use cache::PagedItemCache;
pub use config::CacheConfig;
pub use error::CacheError;
pub use shared::SharedItemCache;
