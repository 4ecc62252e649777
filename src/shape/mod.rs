//! Shape module - Flattening, renumbering and classifying arrays.

mod classify;
mod flatten;
mod reset;

pub use classify::*;
pub use flatten::*;
pub use reset::*;
