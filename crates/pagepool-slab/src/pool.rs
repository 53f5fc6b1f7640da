//! The block-growing slot pool.

use pagepool_core::PoolId;
use tracing::{debug, trace, warn};

use crate::block::Block;
use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::SlotHandle;

/// Growable pool of fixed-size slots for `T`.
///
/// Slots live in blocks of `BLOCK_SIZE`. Blocks are appended lazily, only
/// when every existing slot is taken, and are never removed or moved for
/// the lifetime of the pool.
///
/// # Allocation order
///
/// [`allocate`](Self::allocate) scans blocks in creation order and takes
/// the least-recently-freed slot of the first block that has one. The scan
/// is skipped entirely when the pool-wide free count is zero.
///
/// # Slot contents
///
/// Fresh blocks hold `T::default()`. A reused slot still holds whatever
/// its previous owner left there; callers initialise slots after
/// allocating them.
pub struct MemoryPool<T, const BLOCK_SIZE: usize = 1024> {
    id: PoolId,
    blocks: Vec<Block<T>>,
    /// Free slots across all blocks.
    free_slots: usize,
    config: PoolConfig,
}

impl<T: Default, const BLOCK_SIZE: usize> MemoryPool<T, BLOCK_SIZE> {
    /// Compile-time check that a block index fits the handle encoding.
    const VALID_BLOCK_SIZE: () = assert!(
        BLOCK_SIZE > 0 && BLOCK_SIZE <= u32::MAX as usize,
        "BLOCK_SIZE must be in 1..=u32::MAX"
    );

    /// Create an empty, unbounded pool.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_BLOCK_SIZE;
        Self {
            id: PoolId::next(),
            blocks: Vec::new(),
            free_slots: 0,
            config: PoolConfig::default(),
        }
    }

    /// Create an empty pool with the given configuration.
    pub fn with_config(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        let mut pool = Self::new();
        pool.config = config;
        Ok(pool)
    }

    /// Hand out an unused slot.
    ///
    /// Appends a new block if every slot is taken. Returns
    /// [`PoolError::CapacityExceeded`] when the configured block limit is
    /// reached, or [`PoolError::AllocationFailed`] when the block storage
    /// cannot be obtained. On error the pool is unchanged.
    pub fn allocate(&mut self) -> Result<SlotHandle, PoolError> {
        self.allocate_mut().map(|(handle, _)| handle)
    }

    /// Hand out an unused slot together with mutable access to it.
    ///
    /// Same growth and error behaviour as [`allocate`](Self::allocate).
    /// The returned reference points at the slot's current contents, which
    /// the caller is expected to overwrite.
    pub fn allocate_mut(&mut self) -> Result<(SlotHandle, &mut T), PoolError> {
        let index = match self.first_free_block() {
            Some(index) => index,
            None => self.grow()?,
        };
        let id = self.id;
        let (slot, value) = self.blocks[index]
            .take_free()
            .expect("selected block has a free slot");
        self.free_slots -= 1;
        trace!(pool = %id, block = index, slot, "allocated slot");
        Ok((SlotHandle::new(id, index as u32, slot), value))
    }

    /// Index of the first block, in creation order, with a free slot.
    fn first_free_block(&self) -> Option<usize> {
        if self.free_slots == 0 {
            return None;
        }
        self.blocks.iter().position(|b| b.free_count() > 0)
    }

    /// Append a block with every slot free; returns its index.
    fn grow(&mut self) -> Result<usize, PoolError> {
        let limit = self.config.max_blocks.unwrap_or(u32::MAX);
        if self.blocks.len() >= limit as usize {
            return Err(PoolError::CapacityExceeded { max_blocks: limit });
        }

        self.blocks
            .try_reserve(1)
            .map_err(|_| PoolError::AllocationFailed {
                bytes: std::mem::size_of::<Block<T>>(),
            })?;
        let block = Block::new(BLOCK_SIZE as u32)?;
        self.blocks.push(block);
        self.free_slots += BLOCK_SIZE;

        debug!(
            pool = %self.id,
            blocks = self.blocks.len(),
            block_size = BLOCK_SIZE,
            "pool grew by one block"
        );
        Ok(self.blocks.len() - 1)
    }
}

impl<T, const BLOCK_SIZE: usize> MemoryPool<T, BLOCK_SIZE> {
    /// Number of slots per block.
    pub const SLOTS_PER_BLOCK: usize = BLOCK_SIZE;

    /// Return a slot to its block's free queue.
    ///
    /// Returns `true` if the slot was released. A handle issued by another
    /// pool, one whose block or slot index is out of range, or one that is
    /// already free is ignored: the call returns `false`, logs a warning,
    /// and leaves the pool untouched.
    pub fn deallocate(&mut self, handle: SlotHandle) -> bool {
        if handle.pool != self.id {
            warn!(pool = %self.id, %handle, "ignoring deallocation of foreign handle");
            return false;
        }
        let Some(block) = self.blocks.get_mut(handle.block as usize) else {
            warn!(pool = %self.id, %handle, "ignoring deallocation of unknown block");
            return false;
        };
        if !block.release(handle.slot) {
            warn!(pool = %self.id, %handle, "ignoring deallocation of free or unknown slot");
            return false;
        }
        self.free_slots += 1;
        trace!(pool = %self.id, block = handle.block, slot = handle.slot, "released slot");
        true
    }

    /// Shared access to an allocated slot.
    ///
    /// Returns `None` for foreign handles and for slots that are free.
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        if handle.pool != self.id {
            return None;
        }
        self.blocks.get(handle.block as usize)?.get(handle.slot)
    }

    /// Mutable access to an allocated slot.
    ///
    /// Returns `None` for foreign handles and for slots that are free.
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        if handle.pool != self.id {
            return None;
        }
        self.blocks.get_mut(handle.block as usize)?.get_mut(handle.slot)
    }

    /// Whether `handle` refers to a slot currently allocated from this pool.
    pub fn contains(&self, handle: SlotHandle) -> bool {
        handle.pool == self.id
            && self
                .blocks
                .get(handle.block as usize)
                .is_some_and(|b| b.is_occupied(handle.slot))
    }

    /// This pool's unique id.
    pub fn id(&self) -> PoolId {
        self.id
    }

    /// The configuration the pool was built with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Number of blocks appended so far.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total slots across all blocks.
    pub fn capacity(&self) -> usize {
        self.blocks.len() * BLOCK_SIZE
    }

    /// Slots currently handed out.
    pub fn live_count(&self) -> usize {
        self.capacity() - self.free_slots
    }

    /// Slots available without growing.
    pub fn free_count(&self) -> usize {
        self.free_slots
    }

    /// Memory usage of all slot storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.iter().map(|b| b.memory_bytes()).sum()
    }
}

impl<T: Default, const BLOCK_SIZE: usize> Default for MemoryPool<T, BLOCK_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
