//! Flattening to and from dot paths.

use crate::access::set;
use crate::path::SEPARATOR;
use crate::value::{Array, Key, Value};

/// Flattens `array` into a single level keyed by full dot path.
///
/// Every leaf (any non-array value, null included) becomes one entry whose
/// key is `prefix` followed by the dotted path to the leaf. Empty nested
/// arrays have no leaves and disappear. Colliding keys keep the last value.
pub fn dot(array: &Array, prefix: &str) -> Array {
    let mut results = Array::new();
    flatten_into(array, prefix, &mut results);
    results
}

fn flatten_into(array: &Array, prefix: &str, results: &mut Array) {
    for (key, value) in array.iter() {
        match value {
            Value::Array(inner) => {
                let nested = format!("{prefix}{key}{SEPARATOR}");
                flatten_into(inner, &nested, results);
            }
            leaf => {
                results.insert(Key::from(format!("{prefix}{key}")), leaf.clone());
            }
        }
    }
}

/// Rebuilds a nested array from a flat one produced by [`dot`].
///
/// Each key is treated as a dot path and set in turn, so later entries win
/// over earlier ones at the same location.
pub fn undot(flat: &Array) -> Array {
    let mut array = Array::new();
    for (key, value) in flat.iter() {
        set(&mut array, key.to_string(), value.clone());
    }
    array
}
