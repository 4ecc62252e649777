//! Ordered associative container.

use super::{Key, Value};
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;
use tracing::warn;

/// Entry is a single key-value pair held by an Array.
#[derive(Debug, Clone)]
struct Entry {
    key: Key,
    value: Value,
}

/// Array is an insertion-ordered map from [`Key`] to [`Value`].
///
/// It plays both roles of a nested document: a list when its keys are the
/// integers `0..n` in order, and a map otherwise. Lookups are linear, which
/// suits the small, shallow containers this crate is built for.
#[derive(Debug, Clone, Default)]
pub struct Array {
    entries: Vec<Entry>,
}

impl Array {
    /// Creates a new empty array.
    pub fn new() -> Self {
        Array {
            entries: Vec::new(),
        }
    }

    /// Creates a new empty array with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Array {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the array holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|e| &e.key == key)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.iter().find(|e| &e.key == key).map(|e| &e.value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|e| &e.key == key)
            .map(|e| &mut e.value)
    }

    /// Returns true if `key` is present, whatever its value (including null).
    pub fn contains_key(&self, key: &Key) -> bool {
        self.position(key).is_some()
    }

    /// Inserts a value under `key`.
    /// An existing entry keeps its position and has its value replaced;
    /// a new entry is appended. Returns the previous value, if any.
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].value, value)),
            None => {
                self.entries.push(Entry { key, value });
                None
            }
        }
    }

    /// Returns the value under `key`, inserting the result of `default` first
    /// if the key is absent.
    pub fn get_or_insert_with<F>(&mut self, key: Key, default: F) -> &mut Value
    where
        F: FnOnce() -> Value,
    {
        let idx = match self.position(&key) {
            Some(idx) => idx,
            None => {
                self.entries.push(Entry {
                    key,
                    value: default(),
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].value
    }

    /// Removes the entry under `key`, returning its value.
    /// The remaining entries keep their order and their keys; integer keys
    /// are not renumbered (see [`reset`](crate::reset)).
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.position(key).map(|idx| self.entries.remove(idx).value)
    }

    /// Returns the key the next [`push`](Self::push) will use: one past the
    /// largest integer key, or `0` when there is none. Returns `None` when
    /// `i64::MAX` is already taken.
    pub fn next_index(&self) -> Option<i64> {
        match self.entries.iter().filter_map(|e| e.key.as_index()).max() {
            Some(max) => max.checked_add(1).map(|next| next.max(0)),
            None => Some(0),
        }
    }

    /// Appends a value under the next free integer key.
    ///
    /// Returns false, leaving the array unchanged, if there is no free
    /// integer key after the largest one.
    pub fn push(&mut self, value: Value) -> bool {
        match self.next_index() {
            Some(index) => {
                self.entries.push(Entry {
                    key: Key::Index(index),
                    value,
                });
                true
            }
            None => {
                warn!("next integer key is already occupied, value dropped");
                false
            }
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|e| &e.key)
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|e| &e.value)
    }
}

/// Arrays compare structurally: same keys, equal values, any order.
impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V> FromIterator<(K, V)> for Array
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut array = Array::new();
        for (key, value) in iter {
            array.insert(key.into(), value.into());
        }
        array
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Array
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Array {
    fn from(values: Vec<T>) -> Self {
        let mut array = Array::with_capacity(values.len());
        for value in values {
            array.push(value.into());
        }
        array
    }
}

/// Owning iterator over the entries of an Array.
#[derive(Debug)]
pub struct IntoIter {
    inner: std::vec::IntoIter<Entry>,
}

impl Iterator for IntoIter {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.key, e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl IntoIterator for Array {
    type Item = (Key, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if crate::shape::is_indexed(self) {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

impl<'de> Deserialize<'de> for Array {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ArrayVisitor;

        impl<'de> Visitor<'de> for ArrayVisitor {
            type Value = Array;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence or a map")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Array, A::Error> {
                let mut array = Array::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(value) = seq.next_element::<Value>()? {
                    array.push(value);
                }
                Ok(array)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Array, A::Error> {
                let mut array = Array::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<Key, Value>()? {
                    array.insert(key, value);
                }
                Ok(array)
            }
        }

        deserializer.deserialize_any(ArrayVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut array = Array::new();
        array.insert(Key::from("a"), Value::from(1));
        array.insert(Key::from("b"), Value::from(2));
        assert_eq!(array.insert(Key::from("a"), Value::from(3)), Some(Value::from(1)));

        let keys: Vec<_> = array.keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("a"), Key::from("b")]);
        assert_eq!(array.get(&Key::from("a")), Some(&Value::from(3)));
    }

    #[test]
    fn test_contains_key_sees_null() {
        let mut array = Array::new();
        array.insert(Key::from("nothing"), Value::Null);
        assert!(array.contains_key(&Key::from("nothing")));
        assert!(!array.contains_key(&Key::from("other")));
    }

    #[test]
    fn test_remove_keeps_keys() {
        let mut array = Array::from(vec!["a", "b", "c"]);
        assert_eq!(array.remove(&Key::Index(0)), Some(Value::from("a")));
        let keys: Vec<_> = array.keys().cloned().collect();
        assert_eq!(keys, vec![Key::Index(1), Key::Index(2)]);
    }

    #[test]
    fn test_push_uses_next_index() {
        let mut array = Array::new();
        array.push(Value::from("a"));
        array.insert(Key::Index(7), Value::from("b"));
        array.insert(Key::from("name"), Value::from("c"));
        array.push(Value::from("d"));
        assert_eq!(array.get(&Key::Index(8)), Some(&Value::from("d")));

        let mut negative = Array::new();
        negative.insert(Key::Index(-5), Value::Null);
        assert_eq!(negative.next_index(), Some(0));
    }

    #[test]
    fn test_push_after_max_index_is_refused() {
        let mut array = Array::new();
        array.insert(Key::Index(i64::MAX), Value::from("a"));
        assert_eq!(array.next_index(), None);

        assert!(!array.push(Value::from("b")));
        assert_eq!(array.len(), 1);
        assert_eq!(array.get(&Key::Index(i64::MAX)), Some(&Value::from("a")));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Array::from([("x", 1), ("y", 2)]);
        let b = Array::from([("y", 2), ("x", 1)]);
        let c = Array::from([("y", 2), ("x", 3)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Array::from([("x", 1)]));
    }

    #[test]
    fn test_equal_arrays_can_differ_in_shape() {
        let list = Array::from([(0, "x"), (1, "y")]);
        let shuffled = Array::from([(1, "y"), (0, "x")]);
        assert_eq!(list, shuffled);
        assert!(crate::is_indexed(&list));
        assert!(!crate::is_indexed(&shuffled));
    }
}
