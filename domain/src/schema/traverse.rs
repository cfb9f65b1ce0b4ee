//! Shared key-by-key rebuild helper for the schema passes

use serde_json::{Map, Value};

/// What to do with one entry of the source mapping
pub(crate) enum Rewrite {
    /// Insert under the same key
    Set(Value),
    /// Leave the key out of the result
    Drop,
    /// Insert every entry of the mapping, overwriting same-named keys
    Merge(Map<String, Value>),
}

/// Rebuild a mapping entry by entry, in source order
///
/// The visitor sees each key with its original value. Later entries overwrite
/// earlier ones, so a `Merge` can be partly undone by a key that follows it.
pub(crate) fn rebuild<F>(source: &Map<String, Value>, mut visit: F) -> Map<String, Value>
where
    F: FnMut(&str, &Value) -> Rewrite,
{
    let mut result = Map::new();
    for (key, value) in source {
        match visit(key, value) {
            Rewrite::Set(v) => {
                result.insert(key.clone(), v);
            }
            Rewrite::Drop => {}
            Rewrite::Merge(entries) => {
                for (k, v) in entries {
                    result.insert(k, v);
                }
            }
        }
    }
    result
}
