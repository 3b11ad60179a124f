use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{CacheError, DataCache};

/// A view over a [`DataCache`] which only holds values of type `T`.
///
/// # Examples
/// ```
/// # use utility_lib::cache::{InMemoryCache, SimpleCache};
/// let mut names = SimpleCache::<_, String>::new(InMemoryCache::new());
/// names.set("first", &"Ada".to_owned()).unwrap();
/// assert_eq!(names.get("first").unwrap().as_deref(), Some("Ada"));
/// ```
pub struct SimpleCache<C, T> {
    inner: C,
    _phantom: PhantomData<fn() -> T>,
}

impl<C: DataCache, T: Serialize + DeserializeOwned> SimpleCache<C, T> {
    pub fn new(inner: C) -> SimpleCache<C, T> {
        SimpleCache {
            inner,
            _phantom: PhantomData,
        }
    }

    /// Returns the value stored under `key`. See [`DataCache::get`].
    pub fn get(&self, key: &str) -> Result<Option<T>, CacheError> {
        self.inner.get(key)
    }

    /// Stores `value` under `key`. See [`DataCache::set`].
    pub fn set(&mut self, key: &str, value: &T) -> Result<(), CacheError> {
        self.inner.set(key, value)
    }

    pub fn delete(&mut self, key: &str) -> bool {
        self.inner.delete(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.inner.has(key)
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Debug, T> Debug for SimpleCache<C, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleCache")
            .field("inner", &self.inner)
            .finish()
    }
}
