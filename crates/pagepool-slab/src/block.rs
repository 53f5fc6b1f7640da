//! Fixed-capacity slot blocks.
//!
//! A [`Block`] is the pool's unit of growth: a boxed slice of slots created
//! in one allocation, plus the bookkeeping that says which slots are free.

use std::collections::VecDeque;

use crate::error::PoolError;

/// A fixed run of slots with FIFO free-slot tracking.
///
/// Slot storage is a `Box<[T]>` allocated to full size at creation and
/// never resized, so moving the `Block` value itself (e.g. when the pool's
/// block list reallocates) leaves every slot at the same address.
pub struct Block<T> {
    /// Slot storage. Default-initialised at creation.
    slots: Box<[T]>,
    /// Free slot indices; the front is reused first.
    free: VecDeque<u32>,
    /// `occupied[i]` is true while slot `i` is handed out.
    occupied: Vec<bool>,
}

impl<T: Default> Block<T> {
    /// Create a block of `size` default-initialised slots, all free.
    ///
    /// Returns [`PoolError::AllocationFailed`] if the storage cannot be
    /// reserved instead of aborting the process.
    pub fn new(size: u32) -> Result<Self, PoolError> {
        let len = size as usize;
        let failed = || PoolError::AllocationFailed {
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        };

        let mut slots = Vec::new();
        slots.try_reserve_exact(len).map_err(|_| failed())?;
        slots.resize_with(len, T::default);

        let mut free = VecDeque::new();
        free.try_reserve_exact(len).map_err(|_| failed())?;
        free.extend(0..size);

        let mut occupied = Vec::new();
        occupied.try_reserve_exact(len).map_err(|_| failed())?;
        occupied.resize(len, false);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            free,
            occupied,
        })
    }
}

impl<T> Block<T> {
    /// Take the least-recently-freed slot, if any.
    ///
    /// Returns the slot index and mutable access to its (possibly stale)
    /// contents.
    pub fn take_free(&mut self) -> Option<(u32, &mut T)> {
        let slot = self.free.pop_front()?;
        self.occupied[slot as usize] = true;
        Some((slot, &mut self.slots[slot as usize]))
    }

    /// Return `slot` to the back of the free queue.
    ///
    /// Returns `false` without touching the queue if `slot` is out of range
    /// or already free.
    pub fn release(&mut self, slot: u32) -> bool {
        match self.occupied.get_mut(slot as usize) {
            Some(taken) if *taken => {
                *taken = false;
                self.free.push_back(slot);
                true
            }
            _ => false,
        }
    }

    /// Whether `slot` is currently handed out.
    pub fn is_occupied(&self, slot: u32) -> bool {
        self.occupied.get(slot as usize).copied().unwrap_or(false)
    }

    /// Shared access to an occupied slot.
    pub fn get(&self, slot: u32) -> Option<&T> {
        if self.is_occupied(slot) {
            self.slots.get(slot as usize)
        } else {
            None
        }
    }

    /// Mutable access to an occupied slot.
    pub fn get_mut(&mut self, slot: u32) -> Option<&mut T> {
        if self.is_occupied(slot) {
            self.slots.get_mut(slot as usize)
        } else {
            None
        }
    }

    /// Number of free slots.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Number of occupied slots.
    pub fn used(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Memory usage of the slot storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<T>()
    }
}
