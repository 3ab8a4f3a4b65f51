use std::collections::TryReserveError;

use thiserror::Error;

/// Errors returned by fallible tree operations.
///
/// A failed operation leaves the tree exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The arena could not grow by one node.
    #[error("failed to allocate a tree node: {0}")]
    Alloc(#[from] TryReserveError),

    /// The index type cannot address another node.
    #[error("reached maximum number of nodes for the index type")]
    CapacityExceeded,
}

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;
