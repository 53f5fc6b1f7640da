//! Mutex-guarded cache for use across threads.

use std::sync::{Mutex, MutexGuard};

use pagepool_core::{ItemSource, PageIndex};

use crate::cache::PagedItemCache;
use crate::error::CacheError;

/// A [`PagedItemCache`] behind a mutex.
///
/// Every operation holds the lock for its full duration, so a page swap is
/// a single critical section: no caller can observe the cache between the
/// unload of one page and the load of the next. Item access is closure
/// based because a reference into the resident page must not escape the
/// lock.
pub struct SharedItemCache<S: ItemSource, const BLOCK_SIZE: usize = 1024> {
    inner: Mutex<PagedItemCache<S, BLOCK_SIZE>>,
}

impl<S, const BLOCK_SIZE: usize> SharedItemCache<S, BLOCK_SIZE>
where
    S: ItemSource,
    S::Item: Default,
{
    /// Wrap an existing cache.
    pub fn new(cache: PagedItemCache<S, BLOCK_SIZE>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Run `f` on the item at global `index`, swapping pages if needed.
    pub fn with_item<R>(
        &self,
        index: usize,
        f: impl FnOnce(&S::Item) -> R,
    ) -> Result<R, CacheError> {
        let mut cache = self.lock()?;
        let item = cache.get_item(index)?;
        Ok(f(item))
    }

    /// Run `f` on a mutable reference to the item at global `index`.
    pub fn with_item_mut<R>(
        &self,
        index: usize,
        f: impl FnOnce(&mut S::Item) -> R,
    ) -> Result<R, CacheError> {
        let mut cache = self.lock()?;
        let item = cache.get_item_mut(index)?;
        Ok(f(item))
    }

    /// See [`PagedItemCache::load_page`].
    pub fn load_page(&self, page: PageIndex) -> Result<(), CacheError> {
        self.lock()?.load_page(page)
    }

    /// See [`PagedItemCache::unload_page`].
    pub fn unload_page(&self, page: PageIndex) -> Result<(), CacheError> {
        self.lock()?.unload_page(page);
        Ok(())
    }

    /// See [`PagedItemCache::cleanup`].
    pub fn cleanup(&self) -> Result<(), CacheError> {
        self.lock()?.cleanup();
        Ok(())
    }

    /// The resident page, if any.
    pub fn current_page(&self) -> Result<Option<PageIndex>, CacheError> {
        Ok(self.lock()?.current_page())
    }

    /// Unwrap the inner cache.
    pub fn into_inner(self) -> Result<PagedItemCache<S, BLOCK_SIZE>, CacheError> {
        self.inner.into_inner().map_err(|_| CacheError::Poisoned)
    }

    fn lock(&self) -> Result<MutexGuard<'_, PagedItemCache<S, BLOCK_SIZE>>, CacheError> {
        self.inner.lock().map_err(|_| CacheError::Poisoned)
    }
}
