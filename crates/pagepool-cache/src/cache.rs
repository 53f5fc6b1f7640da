//! The single-page item cache.

use std::ops::Range;

use pagepool_core::{ItemSource, PageIndex};
use pagepool_slab::{MemoryPool, SlotHandle};
use tracing::debug;

use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::load::PageLoad;

/// Windowed view over an [`ItemSource`] with one resident page.
///
/// Items of the resident page live in slots of an owned [`MemoryPool`].
/// Accessing an item on another page swaps pages: every slot of the old
/// page goes back to the pool, then one slot per index of the new page is
/// allocated and handed to [`ItemSource::init_item`]. Because the pool
/// reuses freed slots first, steady-state paging does not grow the pool
/// beyond what the largest page needs.
///
/// References returned by [`get_item`](Self::get_item) borrow the cache,
/// so none can outlive the page swap that would invalidate it.
pub struct PagedItemCache<S: ItemSource, const BLOCK_SIZE: usize = 1024> {
    source: S,
    pool: MemoryPool<S::Item, BLOCK_SIZE>,
    /// The resident page, or `None` before the first load and after cleanup.
    current_page: Option<PageIndex>,
    /// Handles of the resident page's items, in index order.
    active: Vec<SlotHandle>,
    config: CacheConfig,
}

impl<S, const BLOCK_SIZE: usize> PagedItemCache<S, BLOCK_SIZE>
where
    S: ItemSource,
    S::Item: Default,
{
    /// Create an empty cache over `source`. No page is loaded.
    pub fn new(source: S, config: CacheConfig) -> Result<Self, CacheError> {
        config.validate()?;
        let pool = MemoryPool::with_config(config.pool.clone())?;
        Ok(Self {
            source,
            pool,
            current_page: None,
            active: Vec::new(),
            config,
        })
    }

    /// Shared access to the item at global `index`.
    ///
    /// Loads the owning page first if it is not resident. Returns
    /// [`CacheError::OutOfRange`] for `index >= total_items()` without
    /// touching the resident page.
    pub fn get_item(&mut self, index: usize) -> Result<&S::Item, CacheError> {
        let handle = self.resolve(index)?;
        Ok(self
            .pool
            .get(handle)
            .expect("active handles are allocated"))
    }

    /// Mutable access to the item at global `index`.
    ///
    /// Changes last until the page is unloaded; a later reload starts from
    /// the initializer again.
    pub fn get_item_mut(&mut self, index: usize) -> Result<&mut S::Item, CacheError> {
        let handle = self.resolve(index)?;
        Ok(self
            .pool
            .get_mut(handle)
            .expect("active handles are allocated"))
    }

    fn resolve(&mut self, index: usize) -> Result<SlotHandle, CacheError> {
        let total = self.source.total_items();
        if index >= total {
            return Err(CacheError::OutOfRange { index, total });
        }
        let page = PageIndex::containing(index, self.config.page_size);
        let offset = index % self.config.page_size;
        // A short page stays short after the source grows; reload it.
        if self.current_page == Some(page) && offset >= self.active.len() {
            self.release_active();
        }
        if self.current_page != Some(page) {
            self.load_page(page)?;
        }
        self.active
            .get(offset)
            .copied()
            .ok_or(CacheError::OutOfRange { index, total })
    }

    /// Make `page` the resident page.
    ///
    /// A no-op if `page` is already resident. Otherwise the resident page
    /// is unloaded and every item of `page` is allocated and initialised in
    /// ascending index order. `current_page` changes only once all of them
    /// succeeded; on error every slot acquired for `page` is released and
    /// no page is resident.
    pub fn load_page(&mut self, page: PageIndex) -> Result<(), CacheError> {
        if self.current_page == Some(page) {
            return Ok(());
        }
        let range = self.page_bounds(page).ok_or(CacheError::PageOutOfRange {
            page,
            page_count: self.page_count(),
        })?;

        self.release_active();

        let mut load = PageLoad::new(&mut self.pool, range.len());
        for index in range.clone() {
            let slot = load.acquire()?;
            self.source.init_item(slot, index)?;
        }
        self.active = load.commit();
        self.current_page = Some(page);

        debug!(
            %page,
            first = range.start,
            items = self.active.len(),
            pool_blocks = self.pool.block_count(),
            "loaded page"
        );
        Ok(())
    }

    /// Return the resident page's slots to the pool.
    ///
    /// The resident page is unloaded whatever `page` names; the argument
    /// only documents the caller's intent. Afterwards no page is resident.
    pub fn unload_page(&mut self, page: PageIndex) {
        if self.current_page.is_some_and(|resident| resident != page) {
            debug!(
                requested = %page,
                resident = ?self.current_page,
                "unload requested for non-resident page; unloading resident page"
            );
        }
        let released = self.release_active();
        debug!(%page, released, "unloaded page");
    }

    /// Unload the resident page and reset to the initial "no page" state.
    ///
    /// The next access reloads its page from the source.
    pub fn cleanup(&mut self) {
        let released = self.release_active();
        debug!(released, "cache cleaned up");
    }

    /// Release every active slot and forget the resident page.
    fn release_active(&mut self) -> usize {
        let released = self.active.len();
        for handle in self.active.drain(..) {
            self.pool.deallocate(handle);
        }
        self.current_page = None;
        released
    }

    /// Clean up and return the item source.
    pub fn into_source(mut self) -> S {
        self.cleanup();
        self.source
    }
}

impl<S: ItemSource, const BLOCK_SIZE: usize> PagedItemCache<S, BLOCK_SIZE> {
    /// The resident page, if any.
    pub fn current_page(&self) -> Option<PageIndex> {
        self.current_page
    }

    /// Number of items materialized for the resident page.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Handles of the resident page's items, in index order.
    pub fn active_handles(&self) -> &[SlotHandle] {
        &self.active
    }

    /// Items of the resident page, in index order.
    pub fn resident_items(&self) -> impl Iterator<Item = &S::Item> + '_ {
        self.active.iter().filter_map(|&h| self.pool.get(h))
    }

    /// Configured page size.
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Total items reported by the source.
    pub fn total_items(&self) -> usize {
        self.source.total_items()
    }

    /// Number of pages needed to cover every item.
    pub fn page_count(&self) -> usize {
        self.source.total_items().div_ceil(self.config.page_size)
    }

    /// Global index range covered by `page`, or `None` past the last page.
    ///
    /// The last page is short when the item count is not a multiple of the
    /// page size.
    pub fn page_bounds(&self, page: PageIndex) -> Option<Range<usize>> {
        let total = self.source.total_items();
        let start = page.first_index(self.config.page_size);
        if start >= total {
            return None;
        }
        let end = start.saturating_add(self.config.page_size).min(total);
        Some(start..end)
    }

    /// The backing pool, for inspection.
    pub fn pool(&self) -> &MemoryPool<S::Item, BLOCK_SIZE> {
        &self.pool
    }

    /// The item source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the item source.
    ///
    /// If the item count grows while the short last page is resident, the
    /// first access past its end reloads that page.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The configuration the cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}
