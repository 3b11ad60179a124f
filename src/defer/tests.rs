#![cfg(test)]

use std::cell::RefCell;

use super::*;

#[test]
fn test_runs_in_order_on_drop() {
    let log = RefCell::new(Vec::new());
    {
        let log = &log;
        let mut deferral = Deferral::new();
        for n in 1..=3 {
            deferral.add(move || log.borrow_mut().push(n));
        }
        assert_eq!(deferral.len(), 3);
        assert!(log.borrow().is_empty(), "Nothing should run before the drop.");
    }
    assert_eq!(*log.borrow(), [1, 2, 3]);
}

#[test]
fn test_defer_chaining() {
    let log = RefCell::new(String::new());
    let deferral = Deferral::new()
        .defer(|| log.borrow_mut().push('a'))
        .defer(|| log.borrow_mut().push('b'));
    drop(deferral);
    assert_eq!(*log.borrow(), "ab");
}

#[test]
fn test_cancel() {
    let log = RefCell::new(Vec::new());
    {
        let mut deferral = Deferral::new();
        deferral.add(|| log.borrow_mut().push("cancelled"));
        deferral.cancel();
        assert!(deferral.is_empty());
        deferral.add(|| log.borrow_mut().push("kept"));
    }
    assert_eq!(*log.borrow(), ["kept"], "Only closures added after cancel should run.");
}

#[test]
fn test_run_early() {
    let count = RefCell::new(0);
    let mut deferral = Deferral::new();
    deferral.add(|| *count.borrow_mut() += 1);

    deferral.run();
    assert_eq!(*count.borrow(), 1);
    drop(deferral);
    assert_eq!(*count.borrow(), 1, "Closures should only run once.");
}
