use std::cell::{Cell, OnceCell};
use std::fmt::{self, Debug, Formatter};

/// A function that only runs the first time it is called. Every call returns the result of that
/// first call, regardless of the arguments it is given.
///
/// # Examples
/// ```
/// # use utility_lib::functional::once;
/// let power = once(|(n, t): (u64, u32)| n.pow(t + 1));
/// assert_eq!(*power.call((2, 2)), 8);
/// assert_eq!(*power.call((3, 3)), 8);
/// ```
pub struct Once<F, R> {
    func: Cell<Option<F>>,
    result: OnceCell<R>,
}

impl<F, R> Once<F, R> {
    /// Calls the wrapped function with `args` if it hasn't been called yet, returning a reference
    /// to the first result.
    ///
    /// # Panics
    /// Panics if the wrapped function calls this Once recursively, and on every call after the
    /// wrapped function itself panicked, as there is no result to return.
    pub fn call<A>(&self, args: A) -> &R
    where
        F: FnOnce(A) -> R,
    {
        self.result.get_or_init(|| {
            // The function is only missing if it is running further up the stack or panicked.
            let Some(func) = self.func.take() else {
                panic!("Once called recursively or after a panicked call");
            };
            func(args)
        })
    }

    /// Returns true if the wrapped function has already been called.
    pub fn is_called(&self) -> bool {
        self.result.get().is_some()
    }

    /// Returns the first result, or None if the wrapped function hasn't been called yet.
    pub fn get(&self) -> Option<&R> {
        self.result.get()
    }
}

impl<F, R: Debug> Debug for Once<F, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Once")
            .field("result", &self.result.get())
            .finish_non_exhaustive()
    }
}

/// Wraps `func` so that it runs on the first call only. See [`Once`].
pub const fn once<F, R>(func: F) -> Once<F, R> {
    Once {
        func: Cell::new(Some(func)),
        result: OnceCell::new(),
    }
}
