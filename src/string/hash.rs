const SEED_1: u32 = 0xdeadbeef;
const SEED_2: u32 = 0x41c6ce57;

/// Quickly hashes a string to a 53 bit integer, using the cyrb53 algorithm.
///
/// The string is hashed as UTF-16 code units, so hashes agree with other cyrb53 implementations
/// that work on UTF-16 strings. This isn't a cryptographic hash and should only be used where
/// collisions are merely a performance concern.
///
/// # Examples
/// ```
/// # use utility_lib::string::fast_hash;
/// let hash = fast_hash("hello world", 0);
/// assert_eq!(hash, fast_hash("hello world", 0));
/// assert_ne!(hash, fast_hash("hello world", 1));
/// assert!(hash < 1 << 53);
/// ```
pub fn fast_hash(input: &str, seed: u32) -> u64 {
    let mut h1 = SEED_1 ^ seed;
    let mut h2 = SEED_2 ^ seed;

    for unit in input.encode_utf16() {
        h1 = (h1 ^ unit as u32).wrapping_mul(0x85ebca77);
        h2 = (h2 ^ unit as u32).wrapping_mul(0xc2b2ae3d);
    }

    h1 ^= (h1 ^ (h2 >> 15)).wrapping_mul(0x735a2d97);
    h2 ^= (h2 ^ (h1 >> 15)).wrapping_mul(0xcaf649a9);
    h1 ^= h2 >> 16;
    h2 ^= h1 >> 16;

    // The upper 32 bits come from h2 and the lower 21 from h1.
    ((h2 as u64) << 21) + (h1 >> 11) as u64
}
