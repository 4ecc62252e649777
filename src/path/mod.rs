//! Path module - Dot-separated addresses into nested containers.

mod path;

pub use path::*;
