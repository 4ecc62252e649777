//! Access module - Reading and writing nested values by dot path.
//!
//! [`get`] and [`has`] never modify their input. [`set`], [`remove`] and
//! [`add`] mutate the array in place.

mod access;


pub use access::*;
