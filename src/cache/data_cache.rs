use serde::Serialize;
use serde::de::DeserializeOwned;

use super::CacheError;

/// A string keyed store of serializable values.
///
/// Values are converted on the way in and out, so a value may be read back as any type that its
/// stored form deserializes to.
pub trait DataCache {
    /// Returns the value stored under `key`, or `None` if there isn't one.
    ///
    /// # Errors
    /// Returns [`CacheError::Decode`] if the stored value can't be read as a `T`.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError>;

    /// Stores `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    /// Returns [`CacheError::Encode`] if `value` can't be serialized. The cache is left unchanged.
    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), CacheError>;

    /// Removes the value stored under `key`, returning true if there was one.
    fn delete(&mut self, key: &str) -> bool;

    fn has(&self, key: &str) -> bool;

    /// Removes every value.
    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the keys in the cache, in no particular order.
    fn keys(&self) -> impl Iterator<Item = &str>;
}
