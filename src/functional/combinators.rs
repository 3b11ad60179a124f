/// Returns its argument unchanged.
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns a function which ignores its input and always produces a clone of `value`.
pub fn constant<T: Clone, A>(value: T) -> impl Fn(A) -> T {
    move |_| value.clone()
}

/// Wraps `func` so that it is run for its side effect and the value is passed through unchanged.
///
/// # Examples
/// ```
/// # use utility_lib::functional::effect;
/// let mut seen = Vec::new();
/// let doubled: Vec<_> = [1, 2, 3].into_iter()
///     .map(effect(|n: &i32| seen.push(*n)))
///     .map(|n| n * 2)
///     .collect();
/// assert_eq!(doubled, [2, 4, 6]);
/// assert_eq!(seen, [1, 2, 3]);
/// ```
pub fn effect<T, F: FnMut(&T)>(mut func: F) -> impl FnMut(T) -> T {
    move |value| {
        func(&value);
        value
    }
}

/// Wraps the predicate `func` so that its result is negated.
pub fn not<T: ?Sized, F: Fn(&T) -> bool>(func: F) -> impl Fn(&T) -> bool {
    move |value| !func(value)
}
