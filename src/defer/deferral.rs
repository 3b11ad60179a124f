use std::fmt::{self, Debug, Formatter};
use std::mem;

/// A guard which collects cleanup closures and runs them when it is dropped, in the order they
/// were added.
///
/// If a cleanup closure panics the remaining closures are skipped.
///
/// # Examples
/// ```
/// # use std::cell::RefCell;
/// # use utility_lib::defer::Deferral;
/// let log = RefCell::new(Vec::new());
/// {
///     let mut deferral = Deferral::new();
///     deferral.add(|| log.borrow_mut().push("close file"));
///     deferral.add(|| log.borrow_mut().push("release lock"));
///     log.borrow_mut().push("work");
/// }
/// assert_eq!(*log.borrow(), ["work", "close file", "release lock"]);
/// ```
#[must_use = "cleanup runs as soon as the deferral is dropped"]
#[derive(Default)]
pub struct Deferral<'a> {
    cleanup: Vec<Box<dyn FnOnce() + 'a>>,
}

impl<'a> Deferral<'a> {
    pub fn new() -> Deferral<'a> {
        Deferral::default()
    }

    /// Adds `func` to be run when this Deferral is dropped.
    pub fn add<F: FnOnce() + 'a>(&mut self, func: F) {
        self.cleanup.push(Box::new(func));
    }

    /// Adds `func` and returns the Deferral, for chaining.
    pub fn defer<F: FnOnce() + 'a>(mut self, func: F) -> Deferral<'a> {
        self.add(func);
        self
    }

    /// Returns the number of pending closures.
    pub fn len(&self) -> usize {
        self.cleanup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleanup.is_empty()
    }

    /// Runs the pending closures now, leaving the Deferral empty.
    pub fn run(&mut self) {
        for func in mem::take(&mut self.cleanup) {
            func();
        }
    }

    /// Discards the pending closures without running them.
    pub fn cancel(&mut self) {
        self.cleanup.clear();
    }
}

impl Drop for Deferral<'_> {
    fn drop(&mut self) {
        self.run();
    }
}

impl Debug for Deferral<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferral")
            .field("pending", &self.cleanup.len())
            .finish()
    }
}
