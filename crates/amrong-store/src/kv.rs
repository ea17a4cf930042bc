//! Key-value backend trait and the typed wrapper on top of it.

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{FileStore, MemoryStore, StoreError};

/// A raw key-value backend.
///
/// Backends are used from a single session, so methods take `&self` and
/// implementations use interior mutability where they need it.
pub trait KvStore {
    /// Get the raw bytes stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// List all keys, sorted.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Type-safe store with automatic JSON serialization.
///
/// Cloning a `Store` is cheap and shares the backend, so the cart and the
/// submission logs can all write through the same storage.
#[derive(Clone)]
pub struct Store {
    backend: Rc<dyn KvStore>,
}

impl Store {
    /// Wrap an existing backend.
    pub fn new(backend: impl KvStore + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Open an empty in-memory store.
    pub fn open_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Open (creating if needed) a directory-backed store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = Store::open_dir(".amrong")?;
    /// ```
    pub fn open_dir(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Ok(Self::new(FileStore::open(dir)?))
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// bytes don't decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the store, replacing whatever was there.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, &bytes)?;
        tracing::trace!(key, bytes = bytes.len(), "value stored");
        Ok(())
    }

    /// Get the raw bytes under a key.
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.backend.get(key)
    }

    /// Store raw bytes under a key, bypassing serialization.
    pub fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.backend.set(key, value)
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.backend.delete(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.backend.exists(key)
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.backend.keys()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        quantity: u32,
    }

    #[test]
    fn test_typed_roundtrip() {
        let store = Store::open_memory();
        let entries = vec![Entry {
            id: "cola-drink".to_string(),
            quantity: 2,
        }];

        store.set("cart", &entries).unwrap();
        let loaded: Option<Vec<Entry>> = store.get("cart").unwrap();
        assert_eq!(loaded, Some(entries));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = Store::open_memory();
        let loaded: Option<Vec<Entry>> = store.get("cart").unwrap();
        assert!(loaded.is_none());
        assert!(!store.exists("cart").unwrap());
    }

    #[test]
    fn test_malformed_value_is_error() {
        let store = Store::open_memory();
        store.set_raw("cart", b"not json").unwrap();

        let err = store.get::<Vec<Entry>>("cart").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_clones_share_backend() {
        let store = Store::open_memory();
        let other = store.clone();

        store.set("reservations", &Vec::<Entry>::new()).unwrap();
        assert!(other.exists("reservations").unwrap());

        other.delete("reservations").unwrap();
        assert!(!store.exists("reservations").unwrap());
    }
}
