//! Collaborator traits consumed by the paging cache.

use crate::error::InitError;

/// The external catalogue a paging cache windows over.
///
/// The cache never enumerates items itself. It asks the source how many
/// items exist and, during a page load, hands it one pool slot per index
/// to populate. Slots may hold stale data from an earlier page; an
/// implementation must overwrite every field it relies on.
pub trait ItemSource {
    /// The item type materialized into pool slots.
    type Item;

    /// Total number of addressable items. Valid global indices are
    /// `0..total_items()`.
    fn total_items(&self) -> usize;

    /// Populate `slot` with the item at global `index`.
    ///
    /// Called once per index each time the owning page is loaded. An error
    /// aborts the load and every slot acquired for that page is returned
    /// to the pool.
    fn init_item(&mut self, slot: &mut Self::Item, index: usize) -> Result<(), InitError>;
}
