use std::collections::HashMap;
use std::hash::Hash;

/// Groups `items` by the key `key_fn` returns for each of them. Items within a group keep the
/// order they were supplied in.
///
/// # Time Complexity
/// O(n) hashing operations, where n is the number of items.
///
/// # Examples
/// ```
/// # use utility_lib::collections::group::group_by;
/// let groups = group_by(["apple", "avocado", "banana"], |s| s.chars().next());
/// assert_eq!(groups[&Some('a')], ["apple", "avocado"]);
/// assert_eq!(groups[&Some('b')], ["banana"]);
/// ```
pub fn group_by<T, K, I, F>(items: I, mut key_fn: F) -> HashMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}
