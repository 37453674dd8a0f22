//! Cart error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by cart operations.
///
/// Mutations keep their in-memory update even when the persistence write
/// fails; the error tells the caller the persisted copy is behind.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend failed.
    #[error("cart storage failed: {0}")]
    Storage(#[from] StorageError),

    /// The cart contents could not be encoded for persistence.
    #[error("failed to encode cart contents: {0}")]
    Encode(#[from] serde_json::Error),
}
