#![cfg(test)]

use std::collections::HashSet;

use super::*;

const MAX_HASH: u64 = 1 << 53;

#[test]
fn test_fast_hash_range() {
    for input in ["", "a", "hello world", "null", "ünïcödé", "😀 surrogate pairs"] {
        assert!(fast_hash(input, 0) < MAX_HASH, "{input:?} should hash to at most 53 bits.");
        assert!(fast_hash(input, u32::MAX) < MAX_HASH);
    }
}

#[test]
fn test_fast_hash_known_values() {
    assert_eq!(fast_hash("", 0), 7598156216211456);
    assert_eq!(fast_hash("a", 0), 8122081416910708);
    assert_eq!(fast_hash("a", 1), 6007241925418213);
    assert_eq!(fast_hash("hello world", 0), 7414625903637263);
    assert_eq!(
        fast_hash("😀", 0),
        2181950765850048,
        "Characters outside the BMP should be hashed as a surrogate pair."
    );
}

#[test]
fn test_fast_hash_deterministic() {
    assert_eq!(fast_hash("hello world", 0), fast_hash("hello world", 0));
    assert_ne!(
        fast_hash("hello world", 0),
        fast_hash("hello world", 1),
        "Different seeds should produce different hashes."
    );
    assert_ne!(fast_hash("revenge", 0), fast_hash("revenue", 0));
}

#[test]
fn test_fast_hash_spread() {
    let hashes: HashSet<u64> = (0..10_000).map(|i| fast_hash(&format!("key-{i}"), 0)).collect();
    assert_eq!(hashes.len(), 10_000, "Similar keys shouldn't collide.");
}
