use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;
use std::slice;
use std::vec;

use super::{Comparator, ConstructionError, Difference, Numeric, Subtract};

const MIN_LEN: usize = 2;

/// The outcome of walking the binary search down to a single position.
enum Probe {
    Found(usize),
    /// `last` is the final midpoint inspected, `insert_at` is where the element would have to go
    /// to keep the sequence sorted.
    Missing { last: usize, insert_at: usize },
}

/// A sorted sequence which answers membership and position queries in `O(log n)`, ordered by a
/// [`Comparator`].
///
/// It is a logic error to construct a BinarySearch from a sequence that isn't already sorted
/// according to its comparator. This isn't checked, and queries on such a sequence will produce
/// unspecified (but memory safe) results.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BinarySearch.
/// - `i`: The index an item is inserted at.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `at` | `O(1)` |
/// | `has` | `O(log n)` |
/// | `index_of` | `O(log n)` |
/// | `closest_index_of` | `O(log n)` |
/// | `insert` | `O(log n + n - i)` |
pub struct BinarySearch<T, C: Comparator<T> = Subtract> {
    pub(crate) arr: Vec<T>,
    pub(crate) comparator: C,
}

impl<T: Numeric> BinarySearch<T, Subtract> {
    /// Creates a new BinarySearch over a sorted sequence of numbers, ordered ascending.
    ///
    /// # Errors
    /// Returns a [`ConstructionError`] if the sequence contains fewer than 2 elements.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::search::BinarySearch;
    /// let search = BinarySearch::new(vec![1, 4, 8, 12]).unwrap();
    /// assert_eq!(search.index_of(&8), Some(2));
    /// assert!(BinarySearch::new(vec![1]).is_err());
    /// ```
    pub fn new(arr: Vec<T>) -> Result<BinarySearch<T, Subtract>, ConstructionError> {
        BinarySearch::with_comparator(arr, Subtract)
    }
}

impl<T, C: Comparator<T>> BinarySearch<T, C> {
    /// Creates a new BinarySearch over a sequence that is sorted according to `comparator`.
    ///
    /// # Errors
    /// Returns a [`ConstructionError`] if the sequence contains fewer than 2 elements.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::search::BinarySearch;
    /// let search = BinarySearch::with_comparator(vec!["a", "c", "e"], |a: &&str, b: &&str| a.cmp(b))
    ///     .unwrap();
    /// assert!(search.has(&"c"));
    /// assert!(!search.has(&"d"));
    /// ```
    pub fn with_comparator(
        arr: Vec<T>,
        comparator: C,
    ) -> Result<BinarySearch<T, C>, ConstructionError> {
        if arr.len() < MIN_LEN {
            return Err(ConstructionError { len: arr.len() });
        }

        Ok(BinarySearch {
            arr,
            comparator,
        })
    }

    /// Returns the number of elements in the BinarySearch.
    pub fn len(&self) -> usize {
        self.arr.len()
    }

    /// Always false, a BinarySearch can't be constructed with fewer than 2 elements and has no way
    /// to remove them.
    pub fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    /// Returns a reference to the comparator ordering this BinarySearch.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns true if an element comparing equal to `element` is present.
    pub fn has(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Returns the index of an element comparing equal to `element`, or None if there isn't one.
    ///
    /// If several elements compare equal, the index of whichever the search lands on first is
    /// returned, which isn't necessarily the first or last of them.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        match self.probe(element) {
            Probe::Found(index) => Some(index),
            Probe::Missing { .. } => None,
        }
    }

    /// Returns the index of an element comparing equal to `element` if there is one, otherwise the
    /// index of the nearest element out of those adjacent to where the search ended.
    ///
    /// Only the final position of the search and its two neighbours are considered, so this is an
    /// approximation rather than a true nearest neighbour search. For well behaved comparators like
    /// numeric difference it is exact. Ties are resolved towards the lower index.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::search::BinarySearch;
    /// let search = BinarySearch::new(vec![1, 4, 8, 12, 16, 20, 22]).unwrap();
    /// assert_eq!(search.closest_index_of(&3), 1);
    /// assert_eq!(search.closest_index_of(&21), 5);
    /// assert_eq!(search.closest_index_of(&100), 6);
    /// ```
    pub fn closest_index_of(&self, element: &T) -> usize {
        let last = match self.probe(element) {
            Probe::Found(index) => return index,
            Probe::Missing { last, .. } => last,
        };

        let start = last.saturating_sub(1);
        let end = (last + 1).min(self.arr.len() - 1);

        let mut closest = start;
        let mut closest_diff = self.comparator.compare(element, &self.arr[start]).magnitude();

        for index in (start + 1)..=end {
            let diff = self.comparator.compare(element, &self.arr[index]).magnitude();
            if diff < closest_diff {
                closest = index;
                closest_diff = diff;
            }
        }

        closest
    }

    /// Returns a reference to the element at `index`, or None if it is out of bounds.
    pub fn at(&self, index: usize) -> Option<&T> {
        self.arr.get(index)
    }

    /// Inserts `element` at its sorted position, returning the index it was placed at. Elements
    /// comparing equal to existing ones are placed after all of them, so repeated insertion is
    /// stable.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::collections::search::BinarySearch;
    /// let mut search = BinarySearch::new(vec![1, 5, 9]).unwrap();
    /// assert_eq!(search.insert(2), 1);
    /// assert_eq!(search.insert(9), 4);
    /// assert_eq!(&*search, &[1, 2, 5, 9, 9]);
    /// ```
    pub fn insert(&mut self, element: T) -> usize {
        let index = match self.probe(&element) {
            Probe::Found(index) => self.after_equal(&element, index),
            Probe::Missing { insert_at, .. } => insert_at,
        };

        self.arr.insert(index, element);
        index
    }

    /// Returns a slice of the sorted elements.
    pub fn as_slice(&self) -> &[T] {
        &self.arr
    }

    /// Consumes the BinarySearch, returning the sorted elements.
    pub fn into_inner(self) -> Vec<T> {
        self.arr
    }

    fn probe(&self, element: &T) -> Probe {
        let mut left = 0;
        let mut right = self.arr.len() - 1;

        loop {
            let index = (left + right) / 2;

            match self.comparator.compare(element, &self.arr[index]).ordering() {
                Ordering::Greater => left = index + 1,
                Ordering::Less if index == 0 => {
                    return Probe::Missing { last: index, insert_at: left };
                },
                Ordering::Less => right = index - 1,
                Ordering::Equal => return Probe::Found(index),
            }

            if left > right {
                return Probe::Missing { last: index, insert_at: left };
            }
        }
    }

    /// Finds the position just past the run of elements equal to `element`, given that the one at
    /// `found` is.
    fn after_equal(&self, element: &T, found: usize) -> usize {
        let mut left = found + 1;
        let mut right = self.arr.len();

        while left < right {
            let mid = left + (right - left) / 2;
            match self.comparator.compare(element, &self.arr[mid]).ordering() {
                Ordering::Less => right = mid,
                _ => left = mid + 1,
            }
        }

        left
    }
}

impl<T, C: Comparator<T>> Deref for BinarySearch<T, C> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.arr
    }
}

impl<T, C: Comparator<T>> AsRef<[T]> for BinarySearch<T, C> {
    fn as_ref(&self) -> &[T] {
        &self.arr
    }
}

impl<T, C: Comparator<T>> IntoIterator for BinarySearch<T, C> {
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.arr.into_iter()
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a BinarySearch<T, C> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.arr.iter()
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Clone for BinarySearch<T, C> {
    fn clone(&self) -> Self {
        BinarySearch {
            arr: self.arr.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T: Debug, C: Comparator<T>> Debug for BinarySearch<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearch")
            .field("arr", &self.arr)
            .finish_non_exhaustive()
    }
}
