//! In-memory key-value storage.

use std::collections::HashMap;

use super::{CartStorage, StorageError};

/// `HashMap`-backed storage for tests and ephemeral (non-persisted) carts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a single key-value pair.
    ///
    /// Useful in tests that exercise cart restoration from persisted state.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut map = HashMap::new();
        map.insert(key.into(), value.into());
        Self { map }
    }
}

impl CartStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.map.remove(key);
        Ok(())
    }
}
