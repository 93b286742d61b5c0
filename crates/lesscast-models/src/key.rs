//! Object key helpers.
//!
//! S3 keys look like paths but are opaque strings; these helpers avoid
//! `std::path` so behavior does not depend on the host platform.

/// Extract the extension of an object key, including the leading dot.
///
/// Matching is case-sensitive, exactly as stored. Keys with no dot, keys
/// ending in a dot, and dot-leading keys whose only dot is the leading one
/// (e.g. ".mp3") yield `None` — a bare extension is not an extension.
pub fn extension(key: &str) -> Option<&str> {
    let name = file_name(key);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) if idx == name.len() - 1 => None,
        Some(idx) => Some(&name[idx..]),
    }
}

/// Final path segment of a key, with any directory prefix removed.
pub fn file_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Base name of a key: directory prefix and extension both stripped.
///
/// `"talks/ep1.mp4"` -> `"ep1"`.
pub fn base_name(key: &str) -> &str {
    let name = file_name(key);
    match extension(key) {
        Some(ext) => &name[..name.len() - ext.len()],
        None => name,
    }
}
