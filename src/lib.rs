//! # pathmap
//!
//! Read, write, flatten and deep-merge nested containers with dot paths.
//!
//! A container is an [`Array`]: an ordered map whose keys are integers or
//! strings, holding scalars, null, or further arrays. A path such as
//! `"server.ports.0"` names one nested location.
//!
//! ```
//! use pathmap::{array, get, set, Value};
//!
//! let mut config = array! {};
//! set(&mut config, "server.port", 8080);
//! assert_eq!(*get(&config, "server.port", &Value::Null), Value::from(8080));
//! ```
//!
//! ## Modules
//!
//! - [`value`] - The [`Array`], [`Key`] and [`Value`] types and their serde support
//! - [`path`] - Dot-separated [`Path`]s
//! - [`access`] - `get`, `has`, `set`, `remove` and `add`
//! - [`shape`] - `dot`, `undot`, `reset` and the key-shape classifiers
//! - [`merge`] - `extend` and `extend_distinct`

pub mod access;
pub mod error;
pub mod merge;
pub mod path;
pub mod shape;
pub mod value;

pub use access::{add, get, has, remove, set};
pub use error::{Error, Result};
pub use merge::{extend, extend_distinct, merge_with, MergeStrategy};
pub use path::{AsPath, IntoPaths, Path};
pub use shape::{dot, is_associative, is_indexed, reset, undot};
pub use value::{Array, Key, Value};
