//! Reusable item source fixtures.

use indexmap::IndexMap;
use pagepool_core::{InitError, ItemSource};

/// Item produced by [`CountingSource`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountedItem {
    /// Global index the slot was initialised for.
    pub index: usize,
    /// How many times this index had been initialised, including this one.
    pub load_count: u32,
}

/// Synthetic source of `total` items that counts initializer calls.
///
/// Call counts are kept per index in first-seen order, so tests can assert
/// both how often and in what order indices were loaded.
pub struct CountingSource {
    pub total: usize,
    calls: IndexMap<usize, u32>,
    log: Vec<usize>,
}

impl CountingSource {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            calls: IndexMap::new(),
            log: Vec::new(),
        }
    }

    /// Number of times `index` has been initialised.
    pub fn init_count(&self, index: usize) -> u32 {
        self.calls.get(&index).copied().unwrap_or(0)
    }

    /// Total initializer calls across all indices.
    pub fn total_inits(&self) -> usize {
        self.log.len()
    }

    /// Every initialised index, in call order.
    pub fn log(&self) -> &[usize] {
        &self.log
    }

    /// Distinct indices ever initialised, in first-seen order.
    pub fn distinct_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.calls.keys().copied()
    }

    /// Forget recorded calls.
    pub fn reset_counts(&mut self) {
        self.calls.clear();
        self.log.clear();
    }
}

impl ItemSource for CountingSource {
    type Item = CountedItem;

    fn total_items(&self) -> usize {
        self.total
    }

    fn init_item(&mut self, slot: &mut CountedItem, index: usize) -> Result<(), InitError> {
        let count = self.calls.entry(index).or_insert(0);
        *count += 1;
        self.log.push(index);
        *slot = CountedItem {
            index,
            load_count: *count,
        };
        Ok(())
    }
}

/// Category of a catalogue entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EquipKind {
    #[default]
    Weapon,
    Protector,
    Accessory,
    Goods,
    Gem,
}

/// One merchant catalogue line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogItem {
    pub equip_id: u32,
    pub kind: EquipKind,
    pub price: i32,
    /// `-1` means unlimited stock.
    pub sell_quantity: i16,
    pub name: String,
}

/// Source backed by an in-memory catalogue table.
///
/// Models the external lookup tables a real shop reads from: the cache
/// only sees the row count and copies rows into pool slots on load.
pub struct CatalogSource {
    rows: Vec<CatalogItem>,
}

impl CatalogSource {
    pub fn new(rows: Vec<CatalogItem>) -> Self {
        Self { rows }
    }

    /// A generated catalogue of `len` rows cycling through every kind.
    pub fn generated(len: usize) -> Self {
        const KINDS: [EquipKind; 5] = [
            EquipKind::Weapon,
            EquipKind::Protector,
            EquipKind::Accessory,
            EquipKind::Goods,
            EquipKind::Gem,
        ];
        let rows = (0..len)
            .map(|i| CatalogItem {
                equip_id: 1_000_000 + i as u32 * 100,
                kind: KINDS[i % KINDS.len()],
                price: (i as i32 % 50 + 1) * 100,
                sell_quantity: if i % 3 == 0 { -1 } else { (i % 10) as i16 + 1 },
                name: format!("item-{i}"),
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[CatalogItem] {
        &self.rows
    }
}

impl ItemSource for CatalogSource {
    type Item = CatalogItem;

    fn total_items(&self) -> usize {
        self.rows.len()
    }

    fn init_item(&mut self, slot: &mut CatalogItem, index: usize) -> Result<(), InitError> {
        let row = self
            .rows
            .get(index)
            .ok_or_else(|| InitError::new(index, "no catalogue row"))?;
        slot.clone_from(row);
        Ok(())
    }
}

/// Source that fails when asked to initialise `fail_at`.
///
/// Every other index yields its own value, so tests can check that a
/// failed load leaves nothing behind and a later load still works.
pub struct FailingSource {
    pub total: usize,
    pub fail_at: Option<usize>,
    pub successes: usize,
}

impl FailingSource {
    pub fn new(total: usize, fail_at: usize) -> Self {
        Self {
            total,
            fail_at: Some(fail_at),
            successes: 0,
        }
    }
}

impl ItemSource for FailingSource {
    type Item = usize;

    fn total_items(&self) -> usize {
        self.total
    }

    fn init_item(&mut self, slot: &mut usize, index: usize) -> Result<(), InitError> {
        if self.fail_at == Some(index) {
            return Err(InitError::new(index, "deterministic test failure"));
        }
        self.successes += 1;
        *slot = index;
        Ok(())
    }
}
