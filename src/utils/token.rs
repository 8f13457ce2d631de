//! String comparison and normalization.

use std::path::Path;

/// Lowercase, trimmed form used for case-insensitive lookups.
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Lowercased file extension, if any.
pub fn extension_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Check whether the path's extension appears in `allowed` (case-insensitive).
pub fn has_extension(path: &Path, allowed: &[String]) -> bool {
    match extension_lower(path) {
        Some(ext) => allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext)),
        None => false,
    }
}

/// Split a comma-delimited list, trimming each segment and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join URL-ish path segments with single slashes.
pub fn join_url(prefix: &str, segments: &[&str]) -> String {
    let mut out = prefix.trim_end_matches('/').to_string();
    for segment in segments {
        out.push('/');
        out.push_str(segment.trim_matches('/'));
    }
    out
}
