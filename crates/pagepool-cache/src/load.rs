//! Scoped slot acquisition for a single page load.

use pagepool_slab::{MemoryPool, PoolError, SlotHandle};
use tracing::debug;

/// Holds the slots acquired for a page until the load commits.
///
/// Dropping an uncommitted guard returns every acquired slot to the pool,
/// so an error part-way through a load cannot leak slots or leave a
/// half-populated page behind.
#[must_use]
pub(crate) struct PageLoad<'a, T, const BLOCK_SIZE: usize> {
    pool: &'a mut MemoryPool<T, BLOCK_SIZE>,
    handles: Vec<SlotHandle>,
}

impl<'a, T: Default, const BLOCK_SIZE: usize> PageLoad<'a, T, BLOCK_SIZE> {
    /// Start a load expected to acquire `len` slots.
    pub(crate) fn new(pool: &'a mut MemoryPool<T, BLOCK_SIZE>, len: usize) -> Self {
        Self {
            pool,
            handles: Vec::with_capacity(len),
        }
    }

    /// Acquire the next slot, in page order.
    pub(crate) fn acquire(&mut self) -> Result<&mut T, PoolError> {
        let (handle, slot) = self.pool.allocate_mut()?;
        self.handles.push(handle);
        Ok(slot)
    }

    /// Finish the load, keeping every acquired slot.
    pub(crate) fn commit(mut self) -> Vec<SlotHandle> {
        std::mem::take(&mut self.handles)
    }
}

impl<T, const BLOCK_SIZE: usize> Drop for PageLoad<'_, T, BLOCK_SIZE> {
    fn drop(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        debug!(
            pool = %self.pool.id(),
            slots = self.handles.len(),
            "rolling back partial page load"
        );
        for handle in self.handles.drain(..) {
            self.pool.deallocate(handle);
        }
    }
}
