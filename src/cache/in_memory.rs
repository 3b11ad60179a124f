use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::{CacheError, DataCache};

/// A [`DataCache`] held in memory, which stores each value as JSON text.
///
/// Nothing is persisted, so the contents are lost when the cache is dropped.
///
/// # Examples
/// ```
/// # use utility_lib::cache::{DataCache, InMemoryCache};
/// let mut cache = InMemoryCache::new();
/// cache.set("scores", &[1, 2, 3]).unwrap();
///
/// assert_eq!(cache.get::<Vec<u8>>("scores").unwrap(), Some(vec![1, 2, 3]));
/// assert_eq!(cache.get::<Vec<u8>>("missing").unwrap(), None);
/// assert!(cache.get::<String>("scores").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    entries: HashMap<String, String>,
}

impl InMemoryCache {
    pub fn new() -> InMemoryCache {
        InMemoryCache::default()
    }

    /// Stores JSON text under `key` as is, without checking it. Invalid text is only reported
    /// when the key is next read.
    pub fn set_raw(&mut self, key: impl Into<String>, json: impl Into<String>) {
        let key = key.into();
        trace!(key = key.as_str(), "raw cache write");
        self.entries.insert(key, json.into());
    }

    /// Returns the JSON text stored under `key`.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl DataCache for InMemoryCache {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let Some(json) = self.entries.get(key) else {
            return Ok(None);
        };

        serde_json::from_str(json)
            .map(Some)
            .map_err(|source| CacheError::Decode { key: key.to_owned(), source })
    }

    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), CacheError> {
        let json = serde_json::to_string(value)
            .map_err(|source| CacheError::Encode { key: key.to_owned(), source })?;

        debug!(key, bytes = json.len(), "cache write");
        self.entries.insert(key.to_owned(), json);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(key, "cache delete");
        }
        removed
    }

    fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn clear(&mut self) {
        debug!(len = self.entries.len(), "cache clear");
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
