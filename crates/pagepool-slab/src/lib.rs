//! Fixed-size object pool with stable slot handles.
//!
//! A [`MemoryPool`] hands out slots of `T` from an append-only list of
//! blocks. Each block is a boxed slice of exactly `BLOCK_SIZE` slots that
//! is never moved or resized, so a slot stays where it is from the moment
//! its block is created until the pool is dropped.
//!
//! # Architecture
//!
//! ```text
//! MemoryPool<T, BLOCK_SIZE>
//! ├── PoolId (stamped into every handle)
//! ├── PoolConfig (optional block limit)
//! └── Block<T>[] (append-only)
//!     ├── Box<[T]>        BLOCK_SIZE slots, default-initialised on creation
//!     ├── VecDeque<u32>   free slot indices, FIFO
//!     └── Vec<bool>       per-slot occupancy
//! ```
//!
//! Callers address slots through [`SlotHandle`] values rather than
//! references, and resolve them with [`MemoryPool::get`] /
//! [`MemoryPool::get_mut`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod config;
pub mod error;
pub mod handle;
pub mod pool;

// Public re-exports for the primary API surface.
pub use config::PoolConfig;
pub use error::PoolError;
pub use handle::SlotHandle;
pub use pool::MemoryPool;
