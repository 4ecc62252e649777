//! Merge module - Deep merging of arrays.
//!
//! Inputs are folded left to right; later values win except where two arrays
//! meet, in which case the [`MergeStrategy`] decides between merging them key
//! by key and replacing one with the other.

mod extend;


pub use extend::*;
