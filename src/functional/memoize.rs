use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

/// A function whose results are cached by argument, so it runs at most once per distinct key.
///
/// Functions taking several arguments can be memoized by taking them as a tuple. The cache is
/// owned by the Memoize and grows without bound until [`clear`](Memoize::clear) is called.
///
/// # Examples
/// ```
/// # use utility_lib::functional::memoize;
/// let power = memoize(|&(n, t): &(u64, u32)| n.pow(t + 1));
/// assert_eq!(power.call((10, 10)), 100_000_000_000);
/// assert_eq!(power.call((10, 10)), 100_000_000_000);
/// assert_eq!(power.cache_len(), 1);
/// ```
pub struct Memoize<F, K, R> {
    func: F,
    cache: RefCell<HashMap<K, R>>,
}

impl<F, K: Hash + Eq, R: Clone> Memoize<F, K, R>
where
    F: Fn(&K) -> R,
{
    /// Returns the cached result for `key`, calling the wrapped function to produce it if there
    /// isn't one yet.
    ///
    /// The wrapped function may call this Memoize recursively, as the cache isn't borrowed while
    /// it runs.
    pub fn call(&self, key: K) -> R {
        if let Some(result) = self.cache.borrow().get(&key) {
            return result.clone();
        }

        let result = (self.func)(&key);
        self.cache.borrow_mut().insert(key, result.clone());
        result
    }

    /// Returns the number of cached results.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Removes all cached results.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<F, K: Debug, R: Debug> Debug for Memoize<F, K, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Wraps `func` so that its results are cached by argument. See [`Memoize`].
pub fn memoize<F, K, R>(func: F) -> Memoize<F, K, R>
where
    F: Fn(&K) -> R,
{
    Memoize {
        func,
        cache: RefCell::new(HashMap::new()),
    }
}
