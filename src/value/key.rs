//! Container keys.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;

/// Key addresses one entry of an [`Array`](super::Array).
///
/// String keys that spell a canonical decimal integer are normalized to
/// [`Key::Index`], so `Key::from("3") == Key::from(3)`. Everything else,
/// including `"03"`, `"-0"` and `"1.5"`, stays a [`Key::Name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key of a list-like position.
    Index(i64),
    /// Arbitrary string key.
    Name(String),
}

impl Key {
    /// Parses a key from its string form, normalizing integer spellings.
    pub fn parse(s: &str) -> Self {
        if is_canonical_integer(s) {
            if let Ok(i) = s.parse::<i64>() {
                return Key::Index(i);
            }
        }
        Key::Name(s.to_string())
    }

    /// Returns true if this is an integer key.
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Returns the integer if this is an integer key.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Returns the name if this is a string key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }
}

fn is_canonical_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    // "-0" is a name, not the index 0
    !(s.starts_with('-') && digits == "0")
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::parse(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        if is_canonical_integer(&s) {
            if let Ok(i) = s.parse::<i64>() {
                return Key::Index(i);
            }
        }
        Key::Name(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::parse(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Index(i64::from(i))
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        match i64::try_from(i) {
            Ok(i) => Key::Index(i),
            Err(_) => Key::Name(i.to_string()),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a scalar key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
                Ok(Key::parse(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
                Ok(Key::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
                Ok(Key::Index(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
                Ok(i64::try_from(v).map_or_else(|_| Key::Name(v.to_string()), Key::Index))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Key, E> {
                Ok(Key::Index(i64::from(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Key, E> {
                Ok(Key::Name(v.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Key, E> {
                Ok(Key::Name(String::new()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_strings_normalize() {
        assert_eq!(Key::from("0"), Key::Index(0));
        assert_eq!(Key::from("42"), Key::Index(42));
        assert_eq!(Key::from("-3"), Key::Index(-3));
        assert_eq!(Key::from(String::from("7")), Key::from(7));
    }

    #[test]
    fn test_non_canonical_strings_stay_names() {
        for s in ["", "007", "-0", "+1", "1.5", "1e3", "foo", "-", "99999999999999999999"] {
            assert_eq!(Key::from(s), Key::Name(s.to_string()), "{:?}", s);
        }
    }

    #[test]
    fn test_yaml_float_and_null_keys() {
        assert_eq!(serde_yaml::from_str::<Key>("1.5").unwrap(), Key::from("1.5"));
        assert_eq!(serde_yaml::from_str::<Key>("~").unwrap(), Key::from(""));
        assert_eq!(serde_yaml::from_str::<Key>("3").unwrap(), Key::Index(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::Index(12).to_string(), "12");
        assert_eq!(Key::from("a.b").to_string(), "a.b");
    }
}
