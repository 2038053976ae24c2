//! Key-value cache with automatic serialization.

use crate::{CacheError, FileStore, KeyValueStore, MemoryStore};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Type-safe cache over a [`KeyValueStore`].
///
/// Values are stored as JSON. Clones share the same backend.
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

impl Cache {
    /// Wrap an arbitrary backend.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Open a cache persisted under `dir`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::open(".shoecart")?;
    /// ```
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, CacheError> {
        Ok(Self::new(FileStore::open(dir)?))
    }

    /// A cache that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Cart> = cache.get("@RocketShoes:cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Overwrite the value stored under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        tracing::trace!(key, bytes = bytes.len(), "cache write");
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```rust
/// let key = shoecart_cache::cache_key!("@RocketShoes", "cart");
/// assert_eq!(key, "@RocketShoes:cart");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: u64,
        amount: i64,
    }

    #[test]
    fn test_get_missing_is_none() {
        let cache = Cache::in_memory();
        let value: Option<Vec<Entry>> = cache.get("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::in_memory();
        let entries = vec![Entry { id: 1, amount: 2 }, Entry { id: 5, amount: 1 }];
        cache.set("entries", &entries).unwrap();

        let loaded: Vec<Entry> = cache.get("entries").unwrap().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_get_wrong_shape_is_serialize_error() {
        let cache = Cache::in_memory();
        cache.set("entries", "not a list").unwrap();
        let result: Result<Option<Vec<Entry>>, _> = cache.get("entries");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_clones_share_backend() {
        let cache = Cache::in_memory();
        let other = cache.clone();
        cache.set("k", &1).unwrap();
        assert!(other.exists("k").unwrap());
        other.delete("k").unwrap();
        assert!(!cache.exists("k").unwrap());
    }

    #[test]
    fn test_cache_key_macro() {
        assert_eq!(cache_key!("cart", 42), "cart:42");
        assert_eq!(cache_key!("@RocketShoes", "cart"), "@RocketShoes:cart");
    }
}
