//! In-memory backend.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::{KvStore, StoreError};

/// Key-value backend held entirely in memory.
///
/// Nothing survives the process; useful as a fake in tests and for
/// sessions that should leave no trace.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.borrow().contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("cart", b"[]").unwrap();
        store.set("cart", b"[1]").unwrap();

        assert_eq!(store.get("cart").unwrap(), Some(b"[1]".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_keys_sorted() {
        let store = MemoryStore::new();
        store.set("reservations", b"[]").unwrap();
        store.set("cart", b"[]").unwrap();
        store.set("contactMessages", b"[]").unwrap();

        assert_eq!(
            store.keys().unwrap(),
            vec!["cart", "contactMessages", "reservations"]
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.set("", b"[]"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(store.is_empty());
    }
}
