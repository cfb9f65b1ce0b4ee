//! Tool naming: path slugs and length-limited names

use super::entities::MAX_TOOL_NAME_LEN;
use crate::core::string::{char_len, take_chars, truncate_with_marker};
use crate::openapi::HttpMethod;

/// Prefix shared by every generated tool name
pub const TOOL_NAME_PREFIX: &str = "api_call";

/// Characters kept by the plain truncation fallback (a `...` marker follows)
const FALLBACK_KEEP: usize = 60;

/// Identifier-safe form of a path: `/users/{id}/posts` → `users_id_posts`
pub fn slug(path: &str) -> String {
    path.trim_matches('/')
        .replace('/', "_")
        .replace(['{', '}'], "")
}

/// `api_call_<method>_<slug>`; no length limit is applied
pub fn tool_name(method: HttpMethod, path: &str) -> String {
    format!("{TOOL_NAME_PREFIX}_{}_{}", method.as_str(), slug(path))
}

/// Shorten a name that exceeds [`MAX_TOOL_NAME_LEN`] characters
///
/// Names with at least three `_`-separated parts keep their first three parts
/// and their last part; the parts in between are joined and cut to whatever
/// budget is left after the prefix, the suffix and two separators. Names with
/// fewer parts, or whose prefix and suffix leave no room, are cut to 60
/// characters followed by `...`.
pub fn shorten_name(name: &str) -> String {
    if char_len(name) <= MAX_TOOL_NAME_LEN {
        return name.to_string();
    }

    let parts: Vec<&str> = name.split('_').collect();
    if parts.len() < 3 {
        return truncate_with_marker(name, FALLBACK_KEEP);
    }

    let prefix = parts[..3].join("_");
    let suffix = parts[parts.len() - 1];
    let remaining =
        MAX_TOOL_NAME_LEN as isize - char_len(&prefix) as isize - char_len(suffix) as isize - 2;
    if remaining <= 0 {
        return truncate_with_marker(name, FALLBACK_KEEP);
    }

    let middle_parts = parts.get(3..parts.len() - 1).unwrap_or_default();
    let middle = middle_parts.join("_");
    let middle = take_chars(&middle, remaining as usize);
    format!("{prefix}_{middle}_{suffix}")
}
