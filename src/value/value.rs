//! Core value types and operations.

use super::Array;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Value is anything that can sit inside an [`Array`]: a scalar, null, or a
/// nested array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Array),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Coerces the value into a container: arrays pass through, null becomes
    /// empty, any other scalar becomes a one-element list.
    pub fn into_array(self) -> Array {
        match self {
            Value::Array(array) => array,
            Value::Null => Array::new(),
            scalar => Array::from(vec![scalar]),
        }
    }

    /// Returns a short name for the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(Array::from(values))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<Value> for Array {
    type Error = Error;

    fn try_from(value: Value) -> Result<Array> {
        match value {
            Value::Array(a) => Ok(a),
            other => Err(Error::NotAContainer(other.type_name())),
        }
    }
}

/// Parse a value from JSON.
pub fn from_json(json: &str) -> Result<Value> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a value to JSON.
pub fn to_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Serialize a value to indented JSON.
pub fn to_json_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Parse a value from YAML.
pub fn from_yaml(yaml: &str) -> Result<Value> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Serialize a value to YAML.
pub fn to_yaml(value: &Value) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// Parse a JSON document whose root must be a sequence or a map.
pub fn array_from_json(json: &str) -> Result<Array> {
    Array::try_from(from_json(json)?)
}

/// Parse a YAML document whose root must be a sequence or a map.
pub fn array_from_yaml(yaml: &str) -> Result<Array> {
    Array::try_from(from_yaml(yaml)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_types() {
        assert!(Value::Null.is_null());
        assert!(Value::Bool(true).is_bool());
        assert!(Value::Int(42).is_int());
        assert!(Value::Float(2.5).is_float());
        assert!(Value::String("hello".into()).is_string());
        assert!(Value::Array(Array::new()).is_array());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(7), Value::Int(7));
        assert_eq!(Value::from("x"), Value::String("x".into()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
        assert_eq!(Value::from(vec![1, 2]), Value::Array(array![1, 2]));
    }

    #[test]
    fn test_try_from_rejects_scalars() {
        let err = Array::try_from(Value::from("x")).unwrap_err();
        assert!(matches!(err, Error::NotAContainer("string")));
        assert_eq!(Array::try_from(Value::from(array!["a"])).unwrap(), array!["a"]);
    }

    #[test]
    fn test_into_array_coerces_scalars() {
        assert_eq!(Value::Null.into_array(), Array::new());
        assert_eq!(Value::from("x").into_array(), array!["x"]);
        let inner = array! { "k" => "v" };
        assert_eq!(Value::Array(inner.clone()).into_array(), inner);
    }

    #[test]
    fn test_json_roundtrip() {
        let value = Value::Array(array! {
            "name" => "test",
            "count" => 42,
            "tags" => array!["a", "b"],
            "nothing" => Value::Null,
        });

        let json = to_json(&value).unwrap();
        assert!(json.contains(r#""tags":["a","b"]"#));
        let parsed = from_json(&json).unwrap();
        assert_eq!(value, parsed);
    }

    #[test]
    fn test_sparse_array_serializes_as_map() {
        let mut sparse = array!["a", "b", "c"];
        sparse.remove(&crate::Key::Index(1));
        assert_eq!(to_json(&Value::Array(sparse)).unwrap(), r#"{"0":"a","2":"c"}"#);
    }

    #[test]
    fn test_json_object_with_integer_keys_reads_as_list() {
        let array = array_from_json(r#"{"0": "foo", "1": "bar"}"#).unwrap();
        assert_eq!(array, array!["foo", "bar"]);
    }

    #[test]
    fn test_yaml() {
        let array = array_from_yaml("foo:\n  bar: baz\n1: one\n").unwrap();
        assert_eq!(
            array,
            array! { "foo" => array! { "bar" => "baz" }, 1 => "one" }
        );
        assert_eq!(
            array_from_yaml("1.5: half\n~: none\n").unwrap(),
            array! { "1.5" => "half", "" => "none" }
        );
        assert!(matches!(
            array_from_yaml("just a string"),
            Err(Error::NotAContainer("string"))
        ));
    }
}
