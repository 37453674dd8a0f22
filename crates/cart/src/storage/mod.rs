//! Device key-value storage contract and backends.
//!
//! The cart persists itself through a minimal asynchronous key-value
//! interface, so the same store logic runs against the device storage
//! bridge in the app, a file on disk in the CLI, or an in-memory map in
//! tests.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors surfaced by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data exists but cannot be decoded.
    #[error("storage data at {path} is corrupt: {source}")]
    Corrupt {
        /// Location of the corrupt data.
        path: PathBuf,
        /// Decode failure reported by the parser.
        source: serde_json::Error,
    },

    /// The data to be stored could not be encoded.
    #[error("failed to encode storage data: {0}")]
    Encode(serde_json::Error),
}

/// Asynchronous key-value storage used to persist cart state.
///
/// Values are opaque string blobs; callers own the serialization format.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or its contents
    /// cannot be decoded.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Deleting a missing key is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
