//! Error types shared across the pagepool workspace.

use std::error::Error;
use std::fmt;

/// An [`ItemSource`](crate::ItemSource) could not populate a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitError {
    /// Global index of the item that failed.
    pub index: usize,
    /// Human-readable description of the failure.
    pub reason: String,
}

impl InitError {
    /// Create an initializer error for `index`.
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to initialise item {}: {}", self.index, self.reason)
    }
}

impl Error for InitError {}
