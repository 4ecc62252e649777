//! Key-shape classification.

use crate::value::{Array, Key};

/// Returns true if the keys of `array` are exactly `0, 1, .., n-1` in
/// insertion order. The empty array is indexed.
pub fn is_indexed(array: &Array) -> bool {
    array
        .keys()
        .zip(0i64..)
        .all(|(key, expected)| *key == Key::Index(expected))
}

/// Returns true if `array` has a string key, or integer keys that are not
/// the contiguous sequence `0..n` in order. Always the negation of
/// [`is_indexed`].
pub fn is_associative(array: &Array) -> bool {
    !is_indexed(array)
}
