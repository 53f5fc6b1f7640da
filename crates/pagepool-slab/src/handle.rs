//! Slot handles.
//!
//! A [`SlotHandle`] names one slot of one pool. It replaces a raw pointer
//! into block storage: the pool id makes foreign handles detectable, and
//! the block/slot pair resolves to the slot in O(1).

use std::fmt;

use pagepool_core::PoolId;

/// Stable reference to an allocated pool slot.
///
/// Handles stay valid from [`allocate`](crate::MemoryPool::allocate) until
/// the matching [`deallocate`](crate::MemoryPool::deallocate), regardless of
/// how many blocks are appended in between. After deallocation the same
/// block/slot pair may be handed out again, so holding on to a released
/// handle is a caller bug the pool cannot distinguish from a live one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct SlotHandle {
    /// The pool that issued this handle.
    pub(crate) pool: PoolId,
    /// Index of the block within the pool.
    pub(crate) block: u32,
    /// Index of the slot within the block.
    pub(crate) slot: u32,
}

impl SlotHandle {
    /// Create a new handle.
    pub(crate) fn new(pool: PoolId, block: u32, slot: u32) -> Self {
        Self { pool, block, slot }
    }

    /// The pool this handle belongs to.
    pub fn pool(&self) -> PoolId {
        self.pool
    }

    /// Block index within the owning pool.
    pub fn block(&self) -> u32 {
        self.block
    }

    /// Slot index within the block.
    pub fn slot(&self) -> u32 {
        self.slot
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SlotHandle(pool={}, block={}, slot={})",
            self.pool, self.block, self.slot
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_components() {
        let pool = PoolId::next();
        let h = SlotHandle::new(pool, 3, 17);
        assert_eq!(h.pool(), pool);
        assert_eq!(h.block(), 3);
        assert_eq!(h.slot(), 17);
    }

    #[test]
    fn handles_from_different_pools_differ() {
        let a = SlotHandle::new(PoolId::next(), 0, 0);
        let b = SlotHandle::new(PoolId::next(), 0, 0);
        assert_ne!(a, b);
    }

    #[test]
    fn display_includes_location() {
        let pool = PoolId::next();
        let h = SlotHandle::new(pool, 1, 2);
        assert_eq!(
            h.to_string(),
            format!("SlotHandle(pool={pool}, block=1, slot=2)")
        );
    }
}
