//! Integer key renumbering.

use crate::value::{Array, Key, Value};

/// Returns a copy of `array` with its integer keys renumbered from zero in
/// their original order. String keys keep their names and positions.
///
/// With `deep`, nested arrays are renumbered the same way at every level.
pub fn reset(array: &Array, deep: bool) -> Array {
    let mut target = Array::with_capacity(array.len());
    let mut next = 0i64;

    for (key, value) in array.iter() {
        let value = match value {
            Value::Array(inner) if deep => Value::Array(reset(inner, true)),
            other => other.clone(),
        };

        match key {
            Key::Index(_) => {
                target.insert(Key::Index(next), value);
                next += 1;
            }
            Key::Name(_) => {
                target.insert(key.clone(), value);
            }
        }
    }

    target
}
