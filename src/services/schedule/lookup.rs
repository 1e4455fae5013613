//! Safe traversal of untrusted JSON trees

use serde_json::Value;

/// Follow `path` through nested objects.
///
/// Returns `None` at the first missing key or non-object node. A `null` leaf
/// is reported as absent too.
pub fn dig<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |node, key| node.as_object()?.get(*key))
        .filter(|leaf| !leaf.is_null())
}

/// Like [`dig`], but only yields string leaves
pub fn dig_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    dig(root, path)?.as_str()
}

/// Like [`dig`], but only yields array leaves; anything else reads as empty
pub fn dig_array<'a>(root: &'a Value, path: &[&str]) -> &'a [Value] {
    dig(root, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
