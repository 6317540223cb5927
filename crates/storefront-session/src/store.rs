//! Key-value storage with automatic serialization.

use crate::SessionError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Raw string key-value storage backing the session stores.
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value for a key.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Store a raw value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove a key. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), SessionError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, SessionError> {
        Ok(self.get(key)?.is_some())
    }

    /// All keys, in sorted order.
    fn keys(&self) -> Result<Vec<String>, SessionError>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> SessionError {
    SessionError::Store("memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, SessionError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, SessionError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.keys().cloned().collect())
    }
}

/// Type-safe cache over a [`KeyValueStore`].
///
/// Values are stored as JSON. Clones share the same underlying store.
///
/// # Example
///
/// ```rust
/// use storefront_session::store::Cache;
///
/// let cache = Cache::in_memory();
/// cache.set("wishlist", &vec!["women-dresses-1"])?;
///
/// let ids: Option<Vec<String>> = cache.get("wishlist")?;
/// assert_eq!(ids, Some(vec!["women-dresses-1".to_string()]));
/// # Ok::<(), storefront_session::SessionError>(())
/// ```
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn KeyValueStore>,
}

impl Cache {
    /// Wrap a store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Cache backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// JSON does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Like [`get`](Cache::get), but a value that fails to decode is
    /// reported and treated as absent.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "Ignoring unreadable stored value");
                Ok(None)
            }
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), SessionError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, SessionError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, SessionError> {
        self.store.keys()
    }

    /// The underlying raw store.
    pub fn raw(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}
