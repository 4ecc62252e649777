//! Path-addressed reads and writes.

use crate::path::{AsPath, IntoPaths, Path};
use crate::value::{Array, Key, Value};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Resolves `path` below the root without the root-path special case.
///
/// The unsplit path is tried as a literal top-level key first, so a key
/// named `"a.b"` wins over the nested location `a -> b`.
fn resolve<'a>(array: &'a Array, path: &Path) -> Option<&'a Value> {
    if let Some(value) = array.get(&path.literal_key()) {
        return Some(value);
    }

    let (first, rest) = path.segments().split_first()?;
    let mut current = array.get(first)?;
    for segment in rest {
        current = current.as_array()?.get(segment)?;
    }
    Some(current)
}

/// Gets the value at `path`, or `default` if any segment is missing or an
/// intermediate value is not an array.
///
/// The root path returns the whole array (as an owned copy, since the
/// root is an [`Array`] rather than a [`Value`]).
pub fn get<'a, P: AsPath>(array: &'a Array, path: P, default: &'a Value) -> Cow<'a, Value> {
    let path = path.as_path();
    if path.is_root() {
        return Cow::Owned(Value::Array(array.clone()));
    }
    Cow::Borrowed(resolve(array, &path).unwrap_or(default))
}

/// Returns true if a value exists at `path`.
///
/// Existence is by key, not by value: a key holding null is present.
/// An empty array and the root path both answer false.
pub fn has<P: AsPath>(array: &Array, path: P) -> bool {
    let path = path.as_path();
    if array.is_empty() || path.is_root() {
        return false;
    }
    resolve(array, &path).is_some()
}

/// Sets `value` at `path`, creating intermediate arrays as needed, and
/// returns the array for chaining.
///
/// Any intermediate that is missing or not an array is replaced by an empty
/// array. The root path replaces the whole array with
/// [`Value::into_array`] of `value`.
pub fn set<P, V>(array: &mut Array, path: P, value: V) -> &mut Array
where
    P: AsPath,
    V: Into<Value>,
{
    let path = path.as_path();
    let value = value.into();
    if path.is_root() {
        *array = value.into_array();
        return array;
    }
    set_segments(array, path.segments(), value);
    array
}

fn set_segments(array: &mut Array, segments: &[Key], value: Value) {
    match segments {
        [] => {}
        [last] => {
            array.insert(last.clone(), value);
        }
        [head, rest @ ..] => {
            let slot = array.get_or_insert_with(head.clone(), || Value::Array(Array::new()));
            match slot {
                Value::Array(inner) => set_segments(inner, rest, value),
                other => {
                    debug!(key = %head, found = other.type_name(), "replacing scalar with array");
                    let mut inner = Array::new();
                    set_segments(&mut inner, rest, value);
                    *other = Value::Array(inner);
                }
            }
        }
    }
}

/// Removes the entries at one or more paths.
///
/// Each path is resolved from the root independently. A path whose
/// intermediate segments do not all lead to arrays, or whose last segment is
/// absent, leaves the array untouched. The root path is ignored.
pub fn remove<P: IntoPaths>(array: &mut Array, paths: P) {
    for path in paths.into_paths() {
        if !remove_segments(array, path.segments()) {
            trace!(path = %path, "nothing to remove");
        }
    }
}

fn remove_segments(array: &mut Array, segments: &[Key]) -> bool {
    match segments {
        [] => false,
        [last] => array.remove(last).is_some(),
        [head, rest @ ..] => match array.get_mut(head) {
            Some(Value::Array(inner)) => remove_segments(inner, rest),
            _ => false,
        },
    }
}

/// Appends `value` to the list at `path` and returns the array for chaining.
///
/// A missing path starts a new list; a scalar found there becomes the
/// first element of a new list.
pub fn add<P, V>(array: &mut Array, path: P, value: V) -> &mut Array
where
    P: AsPath,
    V: Into<Value>,
{
    let path = path.as_path();
    let empty = Value::Array(Array::new());
    let mut target = match get(array, &*path, &empty).into_owned() {
        Value::Array(list) => list,
        scalar => Array::from(vec![scalar]),
    };
    target.push(value.into());
    set(array, &*path, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_literal_dotted_key_first() {
        let array = array! {
            "a.b" => "literal",
            "a" => array! { "b" => "nested" },
        };
        assert_eq!(*get(&array, "a.b", &Value::Null), Value::from("literal"));
    }

    #[test]
    fn test_get_through_scalar_returns_default() {
        let array = array! { "foo" => "bar" };
        let default = Value::from("fallback");
        assert_eq!(*get(&array, "foo.bar", &default), default);
    }

    #[test]
    fn test_get_null_is_not_default() {
        let array = array! { "foo" => Value::Null };
        assert_eq!(*get(&array, "foo", &Value::from(1)), Value::Null);
    }

    #[test]
    fn test_get_root_returns_whole_array() {
        let array = array! { "foo" => "bar" };
        assert_eq!(*get(&array, "", &Value::Null), Value::Array(array.clone()));
        assert_eq!(
            *get(&array, None::<&str>, &Value::Null),
            Value::Array(array.clone())
        );
    }

    #[test]
    fn test_get_list_index() {
        let array = array! { "list" => array!["a", "b"] };
        assert_eq!(*get(&array, "list.1", &Value::Null), Value::from("b"));
        assert_eq!(*get(&array, "list.2", &Value::Null), Value::Null);
    }

    #[test]
    fn test_has_uses_existence() {
        let array = array! { "foo" => array! { "off" => false, "none" => Value::Null } };
        assert!(has(&array, "foo.off"));
        assert!(has(&array, "foo.none"));
        assert!(!has(&array, "foo.missing"));
        assert!(!has(&array, "foo.off.deeper"));
    }

    #[test]
    fn test_has_empty_or_root() {
        assert!(!has(&Array::new(), "foo"));
        assert!(!has(&array! { "foo" => 1 }, ""));
    }

    #[test]
    fn test_has_literal_dotted_key() {
        let array = array! { "a.b" => Value::Null };
        assert!(has(&array, "a.b"));
    }

    #[test]
    fn test_set_replaces_scalar_intermediate() {
        let mut array = array! { "foo" => "scalar" };
        set(&mut array, "foo.bar", 1);
        assert_eq!(array, array! { "foo" => array! { "bar" => 1 } });
    }

    #[test]
    fn test_set_keeps_siblings() {
        let mut array = array! { "foo" => array! { "a" => 1 } };
        set(&mut array, "foo.b", 2);
        assert_eq!(array, array! { "foo" => array! { "a" => 1, "b" => 2 } });
    }

    #[test]
    fn test_set_root_replaces_everything() {
        let mut array = array! { "foo" => 1 };
        set(&mut array, "", array! { "bar" => 2 });
        assert_eq!(array, array! { "bar" => 2 });

        set(&mut array, None::<&str>, "scalar");
        assert_eq!(array, array!["scalar"]);
    }

    #[test]
    fn test_set_chains() {
        let mut array = Array::new();
        set(set(&mut array, "a", 1), "b", 2);
        assert_eq!(array, array! { "a" => 1, "b" => 2 });
    }

    #[test]
    fn test_remove_many() {
        let mut array = array! {
            "a" => array! { "x" => 1, "y" => 2 },
            "b" => 3,
        };
        remove(&mut array, ["a.x", "b"]);
        assert_eq!(array, array! { "a" => array! { "y" => 2 } });
    }

    #[test]
    fn test_remove_through_missing_intermediate_is_noop() {
        let mut array = array! { "a" => array! { "b" => 1 } };
        let before = array.clone();
        remove(&mut array, "a.x.b");
        remove(&mut array, "a.b.c");
        remove(&mut array, "");
        assert_eq!(array, before);
    }

    #[test]
    fn test_remove_list_element_keeps_other_keys() {
        let mut array = array! { "list" => array!["a", "b", "c"] };
        remove(&mut array, "list.0");
        let list = array.get(&Key::from("list")).and_then(Value::as_array).unwrap();
        let keys: Vec<_> = list.keys().cloned().collect();
        assert_eq!(keys, vec![Key::Index(1), Key::Index(2)]);
    }

    #[test]
    fn test_add_creates_list() {
        let mut array = Array::new();
        add(&mut array, "list", "a");
        add(&mut array, "list", "b");
        assert_eq!(array, array! { "list" => array!["a", "b"] });
    }

    #[test]
    fn test_add_wraps_scalar() {
        let mut array = array! { "x" => "scalar" };
        add(&mut array, "x", "y");
        assert_eq!(array, array! { "x" => array!["scalar", "y"] });
    }

    #[test]
    fn test_add_nested_path() {
        let mut array = Array::new();
        add(&mut array, "a.b", 1);
        assert_eq!(array, array! { "a" => array! { "b" => array![1] } });
    }

    #[test]
    fn test_add_keeps_keys_unique_at_max_index() {
        let mut array = array! { "l" => array! { i64::MAX => "a" } };
        add(&mut array, "l", "b");

        let list = array.get(&Key::from("l")).and_then(Value::as_array).unwrap();
        let keys: Vec<_> = list.keys().cloned().collect();
        assert_eq!(keys, vec![Key::Index(i64::MAX)]);
    }

    #[test]
    fn test_add_root_pushes_onto_array() {
        let mut array = array!["a"];
        add(&mut array, "", "b");
        assert_eq!(array, array!["a", "b"]);
    }
}
