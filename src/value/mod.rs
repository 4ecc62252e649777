//! Value module - In-memory representation of nested containers.
//!
//! An [`Array`] is an ordered map whose keys are integers or strings, so a
//! single type covers both lists and maps.

mod array;
mod key;
mod value;

pub use array::*;
pub use key::*;
pub use value::*;

/// Builds an [`Array`] literal.
///
/// ```
/// use pathmap::{array, Value};
///
/// let list = array!["a", "b"];
/// let map = array! { "name" => "pathmap", "tags" => list, "empty" => Value::Null };
/// assert_eq!(map.len(), 3);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut array = $crate::Array::new();
        $(
            array.insert($crate::Key::from($key), $crate::Value::from($value));
        )+
        array
    }};
    ($($value:expr),+ $(,)?) => {{
        let mut array = $crate::Array::new();
        $(
            array.push($crate::Value::from($value));
        )+
        array
    }};
}
