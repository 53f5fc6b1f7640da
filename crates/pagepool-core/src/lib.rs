//! Core types and traits for the pagepool workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! identifiers shared by the slot pool and the paging cache, and the
//! [`ItemSource`] trait through which the cache reaches the collaborator
//! that knows how many items exist and how to populate each one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::InitError;
pub use id::{PageIndex, PoolId};
pub use traits::ItemSource;
