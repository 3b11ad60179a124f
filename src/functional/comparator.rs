use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

/// Several comparators combined into one, for sorting by multiple keys. Comparators are consulted
/// in the order they were added and the first result that isn't [`Ordering::Equal`] is used.
///
/// # Examples
/// ```
/// # use utility_lib::functional::MultiComparator;
/// let by_len_then_alpha = MultiComparator::new()
///     .then(|a: &&str, b: &&str| a.len().cmp(&b.len()))
///     .then(|a: &&str, b: &&str| a.cmp(b));
///
/// let mut words = ["pear", "fig", "apple", "kiwi"];
/// words.sort_by(|a, b| by_len_then_alpha.compare(a, b));
/// assert_eq!(words, ["fig", "kiwi", "pear", "apple"]);
/// ```
pub struct MultiComparator<'a, T> {
    comparators: Vec<Box<dyn Fn(&T, &T) -> Ordering + 'a>>,
}

impl<'a, T> MultiComparator<'a, T> {
    /// Creates a new MultiComparator with no comparators, which considers everything equal.
    pub fn new() -> MultiComparator<'a, T> {
        MultiComparator {
            comparators: Vec::new(),
        }
    }

    /// Adds `comparator` to be consulted when all previous comparators find two elements equal.
    pub fn then<F: Fn(&T, &T) -> Ordering + 'a>(mut self, comparator: F) -> MultiComparator<'a, T> {
        self.comparators.push(Box::new(comparator));
        self
    }

    /// Adds `comparator` with its result reversed.
    pub fn then_reverse<F>(self, comparator: F) -> MultiComparator<'a, T>
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        self.then(move |a, b| comparator(a, b).reverse())
    }

    /// Returns the number of combined comparators.
    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    /// Returns true if no comparators have been added.
    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.comparators.iter()
            .map(|comparator| comparator(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl<T> Default for MultiComparator<'_, T> {
    fn default() -> Self {
        MultiComparator::new()
    }
}

impl<'a, T, F: Fn(&T, &T) -> Ordering + 'a> FromIterator<F> for MultiComparator<'a, T> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        iter.into_iter()
            .fold(MultiComparator::new(), |combined, comparator| combined.then(comparator))
    }
}

impl<T> Debug for MultiComparator<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiComparator")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "collections")]
impl<T> crate::collections::search::Comparator<T> for MultiComparator<'_, T> {
    type Output = Ordering;

    fn compare(&self, a: &T, b: &T) -> Ordering {
        MultiComparator::compare(self, a, b)
    }
}

/// Combines `comparators` into a single comparator. See [`MultiComparator`].
pub fn multi_comparator<'a, T, I>(comparators: I) -> MultiComparator<'a, T>
where
    I: IntoIterator<Item = Box<dyn Fn(&T, &T) -> Ordering + 'a>>,
{
    MultiComparator {
        comparators: comparators.into_iter().collect(),
    }
}
