//! Dot-separated paths.

use crate::value::Key;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The separator between path segments.
pub const SEPARATOR: char = '.';

/// Path addresses a nested location inside an [`Array`](crate::Array).
///
/// A path is written as segments joined by `.`, e.g. `"server.ports.0"`.
/// The string is split once on construction; each segment becomes a
/// [`Key`], so `"0"` addresses the same entry as the integer key `0`.
/// The empty string is the root path and has no segments.
///
/// There is no escaping: a key that itself contains a `.` can only be
/// reached through the whole-string lookup that [`get`](crate::get) and
/// [`has`](crate::has) try first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    raw: String,
    segments: Vec<Key>,
}

impl Path {
    /// Parses a path from its dotted form.
    pub fn parse(raw: &str) -> Self {
        let segments = if raw.is_empty() {
            Vec::new()
        } else {
            raw.split(SEPARATOR).map(Key::parse).collect()
        };
        Path {
            raw: raw.to_string(),
            segments,
        }
    }

    /// Returns the root path, which addresses the whole container.
    pub fn root() -> Self {
        Path::default()
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the parsed segments.
    pub fn segments(&self) -> &[Key] {
        &self.segments
    }

    /// Returns the path as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the whole unsplit path as a single key.
    pub fn literal_key(&self) -> Key {
        Key::parse(&self.raw)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path::parse(&s)
    }
}

/// AsPath is implemented by everything the operations accept as a path.
///
/// `None` stands for the root path, like the empty string.
pub trait AsPath {
    fn as_path(&self) -> Cow<'_, Path>;
}

impl AsPath for Path {
    fn as_path(&self) -> Cow<'_, Path> {
        Cow::Borrowed(self)
    }
}

impl AsPath for str {
    fn as_path(&self) -> Cow<'_, Path> {
        Cow::Owned(Path::parse(self))
    }
}

impl AsPath for String {
    fn as_path(&self) -> Cow<'_, Path> {
        Cow::Owned(Path::parse(self))
    }
}

impl<T: AsPath + ?Sized> AsPath for &T {
    fn as_path(&self) -> Cow<'_, Path> {
        (**self).as_path()
    }
}

impl<T: AsPath> AsPath for Option<T> {
    fn as_path(&self) -> Cow<'_, Path> {
        match self {
            Some(path) => path.as_path(),
            None => Cow::Owned(Path::root()),
        }
    }
}

/// IntoPaths is implemented by a single path or a collection of paths.
pub trait IntoPaths {
    fn into_paths(self) -> Vec<Path>;
}

impl IntoPaths for &str {
    fn into_paths(self) -> Vec<Path> {
        vec![Path::parse(self)]
    }
}

impl IntoPaths for String {
    fn into_paths(self) -> Vec<Path> {
        vec![Path::parse(&self)]
    }
}

impl IntoPaths for &String {
    fn into_paths(self) -> Vec<Path> {
        vec![Path::parse(self)]
    }
}

impl IntoPaths for Path {
    fn into_paths(self) -> Vec<Path> {
        vec![self]
    }
}

impl IntoPaths for &Path {
    fn into_paths(self) -> Vec<Path> {
        vec![self.clone()]
    }
}

impl<T: AsPath> IntoPaths for &[T] {
    fn into_paths(self) -> Vec<Path> {
        self.iter().map(|p| p.as_path().into_owned()).collect()
    }
}

impl<T: AsPath> IntoPaths for Vec<T> {
    fn into_paths(self) -> Vec<Path> {
        self.as_slice().into_paths()
    }
}

impl<T: AsPath, const N: usize> IntoPaths for [T; N] {
    fn into_paths(self) -> Vec<Path> {
        self.as_slice().into_paths()
    }
}
