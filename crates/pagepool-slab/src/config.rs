//! Pool configuration parameters.

use crate::error::PoolError;

/// Configuration for a [`MemoryPool`](crate::MemoryPool).
///
/// Validated at construction; immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of blocks the pool may append.
    ///
    /// Default: `None` (bounded only by available memory). Each block holds
    /// `BLOCK_SIZE` slots, so the slot capacity is `max_blocks * BLOCK_SIZE`.
    /// Must not be `Some(0)`.
    pub max_blocks: Option<u32>,
}

impl PoolConfig {
    /// Default block limit: unbounded.
    pub const DEFAULT_MAX_BLOCKS: Option<u32> = None;

    /// Create a config that caps the pool at `max_blocks` blocks.
    pub fn bounded(max_blocks: u32) -> Self {
        Self {
            max_blocks: Some(max_blocks),
        }
    }

    /// Check that the configuration can produce a usable pool.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.max_blocks == Some(0) {
            return Err(PoolError::InvalidConfig {
                reason: "max_blocks must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_blocks: Self::DEFAULT_MAX_BLOCKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let config = PoolConfig::default();
        assert_eq!(config.max_blocks, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_blocks_rejected() {
        let result = PoolConfig::bounded(0).validate();
        assert!(matches!(result, Err(PoolError::InvalidConfig { .. })));
    }

    #[test]
    fn bounded_preserves_limit() {
        assert_eq!(PoolConfig::bounded(3).max_blocks, Some(3));
    }
}
