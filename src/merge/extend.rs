//! Deep merge of arrays.

use crate::shape::{is_associative, is_indexed};
use crate::value::{Array, Value};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// MergeStrategy decides what happens when two arrays meet at the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// Always merge key by key. Two lists are merged position by position,
    /// so `["foo", "bar"]` extended with `["yolo"]` gives `["yolo", "bar"]`.
    #[default]
    Positional,
    /// Merge key by key only when both arrays are associative; otherwise the
    /// incoming array replaces the accumulated one.
    Distinct,
}

impl MergeStrategy {
    /// Returns true if `current` and `incoming` should be merged key by key
    /// rather than `incoming` replacing `current`.
    fn merges(self, current: &Array, incoming: &Array) -> bool {
        match self {
            MergeStrategy::Positional => true,
            MergeStrategy::Distinct => is_associative(current) && is_associative(incoming),
        }
    }

    /// Returns true if a whole input should replace the accumulated result.
    ///
    /// Only a non-empty list laid over a list does; any other input is merged
    /// into the result key by key, so an empty layer changes nothing.
    fn replaces_layer(self, merged: &Array, incoming: &Array) -> bool {
        match self {
            MergeStrategy::Positional => false,
            MergeStrategy::Distinct => {
                !incoming.is_empty() && is_indexed(merged) && is_indexed(incoming)
            }
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeStrategy::Positional => f.write_str("positional"),
            MergeStrategy::Distinct => f.write_str("distinct"),
        }
    }
}

impl FromStr for MergeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positional" => Ok(MergeStrategy::Positional),
            "distinct" => Ok(MergeStrategy::Distinct),
            other => Err(format!("unknown merge strategy: {}", other)),
        }
    }
}

/// Merges `arrays` left to right into a new array using `strategy`.
///
/// The accumulator starts empty and each input's top-level keys are merged
/// into it. With [`MergeStrategy::Distinct`] a non-empty list input replaces
/// an accumulated list instead. Inputs are not modified.
pub fn merge_with<'a, I>(strategy: MergeStrategy, arrays: I) -> Array
where
    I: IntoIterator<Item = &'a Array>,
{
    let mut merged = Array::new();
    for array in arrays {
        if strategy.replaces_layer(&merged, array) {
            trace!(len = array.len(), "replacing top-level list");
            merged = array.clone();
        } else {
            merge_entries(&mut merged, array, strategy);
        }
    }
    merged
}

/// Deep-merges `arrays` left to right. Later values win, except that two
/// arrays at the same key are merged recursively, lists included.
pub fn extend<'a, I>(arrays: I) -> Array
where
    I: IntoIterator<Item = &'a Array>,
{
    merge_with(MergeStrategy::Positional, arrays)
}

/// Like [`extend`], but only associative arrays are merged recursively;
/// a list on either side is replaced wholesale by the incoming array.
/// Top-level keys of each input are merged one by one, unless a non-empty
/// list input meets a list result.
pub fn extend_distinct<'a, I>(arrays: I) -> Array
where
    I: IntoIterator<Item = &'a Array>,
{
    merge_with(MergeStrategy::Distinct, arrays)
}

fn merge_array(target: &mut Array, incoming: &Array, strategy: MergeStrategy) {
    if !strategy.merges(target, incoming) {
        trace!(len = incoming.len(), "replacing list");
        *target = incoming.clone();
        return;
    }
    merge_entries(target, incoming, strategy);
}

fn merge_entries(target: &mut Array, incoming: &Array, strategy: MergeStrategy) {
    for (key, value) in incoming.iter() {
        if let (Some(Value::Array(current)), Value::Array(inner)) = (target.get_mut(key), value) {
            merge_array(current, inner, strategy);
            continue;
        }
        target.insert(key.clone(), value.clone());
    }
}
