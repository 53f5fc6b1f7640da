//! Test utilities and fixture item sources for pagepool development.
//!
//! - [`CountingSource`] — records every initializer call per index.
//! - [`CatalogSource`] — copies rows of a merchant catalogue into slots.
//! - [`FailingSource`] — fails deterministically on one index.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    CatalogItem, CatalogSource, CountedItem, CountingSource, EquipKind, FailingSource,
};
