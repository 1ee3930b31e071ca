//! Key-Value store wrapper with automatic serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};

/// A string-keyed, string-valued slot store.
///
/// Implemented by the browser's `localStorage` and by [`crate::MemoryStore`].
/// Methods take `&self`: both backends have interior mutability.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the raw value stored under `key`.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key` from the store. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Type-safe cache over any [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// text is not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get_raw(key)? {
            Some(text) => {
                let value: T = serde_json::from_str(&text)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing whatever was stored.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)?;
        self.store.set_raw(key, &text)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store.delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        qty: u32,
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::new(MemoryStore::new());
        let records = vec![Record {
            name: "Tea".to_string(),
            qty: 2,
        }];

        cache.set("cart", &records).unwrap();
        let loaded: Option<Vec<Record>> = cache.get("cart").unwrap();
        assert_eq!(loaded, Some(records));
    }

    #[test]
    fn test_missing_key_is_none() {
        let cache = Cache::new(MemoryStore::new());
        let loaded: Option<Vec<Record>> = cache.get("cart").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupt_value_is_error() {
        let store = MemoryStore::new();
        store.set_raw("cart", "{not json").unwrap();

        let cache = Cache::new(store);
        let loaded: Result<Option<Vec<Record>>, _> = cache.get("cart");
        assert!(matches!(loaded, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        let cache = Cache::new(store.clone());
        cache.set("cart", &Vec::<Record>::new()).unwrap();
        assert_eq!(store.raw("cart").as_deref(), Some("[]"));

        cache.delete("cart").unwrap();
        assert!(store.raw("cart").is_none());
        cache.delete("cart").unwrap();
    }
}
