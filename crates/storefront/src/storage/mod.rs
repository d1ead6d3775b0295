//! Durable key-value storage port for cart persistence.
//!
//! The cart store persists through the [`CartStorage`] trait rather than any
//! concrete backend, so the persistence dependency is injected at
//! construction. Two implementations ship with the crate:
//!
//! - [`FileStorage`] - one JSON document per key under a directory; the
//!   durable local store used by real sessions.
//! - [`MemoryStorage`] - `HashMap`-backed; for tests and ephemeral sessions.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors that can occur when reading or writing durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the backend cannot represent.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// A durable string key-value store.
///
/// Keys are opaque identifiers; values are whole documents, written
/// atomically from the caller's point of view (the latest `set` wins).
pub trait CartStorage: Send + std::fmt::Debug {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read. An absent key is
    /// `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to delete.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
