//! Pool-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while growing or configuring a pool.
///
/// Every variant is fatal for the operation that raised it: the pool is
/// left unchanged and no handle is produced. Releasing a foreign or
/// already-free handle is not an error; see
/// [`MemoryPool::deallocate`](crate::MemoryPool::deallocate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// Every slot is taken and the configured block limit has been reached.
    CapacityExceeded {
        /// The configured maximum number of blocks.
        max_blocks: u32,
    },
    /// The allocator could not provide memory for a new block.
    AllocationFailed {
        /// Size of the block storage that was requested, in bytes.
        bytes: usize,
    },
    /// The pool configuration is invalid.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { max_blocks } => {
                write!(f, "pool capacity exceeded: all {max_blocks} blocks are full")
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "failed to allocate {bytes} bytes for a new pool block")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid pool config: {reason}")
            }
        }
    }
}

impl Error for PoolError {}
