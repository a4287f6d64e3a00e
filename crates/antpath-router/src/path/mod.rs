//! Path and pattern segmentation
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.
//!
//! Two splits live here. [`segments`] is the exact split used by the matcher:
//! nothing is trimmed or collapsed, so `"/a/b"` yields `["", "a", "b"]` and a
//! trailing separator yields a trailing empty segment. [`reference_segments`]
//! is the split the trailing-wildcard arithmetic is defined against; it drops
//! trailing empty segments and nothing else.

/// Default separator between path segments
pub const DEFAULT_PATH_SEPARATOR: char = '/';

/// Splits `s` on `separator` without trimming or collapsing
///
/// # Examples
///
/// ```
/// use antpath_router::path::segments;
///
/// assert_eq!(segments("/a/b", '/'), vec!["", "a", "b"]);
/// assert_eq!(segments("/a//b/", '/'), vec!["", "a", "", "b", ""]);
/// assert_eq!(segments("", '/'), vec![""]);
/// ```
pub fn segments(s: &str, separator: char) -> Vec<&str> {
    s.split(separator).collect()
}

/// Splits `s` on `separator`, then drops trailing empty segments
///
/// Leading and interior empty segments are kept. An input made only of
/// separators has no segments at all, while the empty string is a single
/// empty segment.
///
/// # Examples
///
/// ```
/// use antpath_router::path::reference_segments;
///
/// assert_eq!(reference_segments("/a/b/", '/'), vec!["", "a", "b"]);
/// assert_eq!(reference_segments("/a//b", '/'), vec!["", "a", "", "b"]);
/// assert!(reference_segments("//", '/').is_empty());
/// assert_eq!(reference_segments("", '/'), vec![""]);
/// ```
pub fn reference_segments(s: &str, separator: char) -> Vec<&str> {
    if s.is_empty() {
        return vec![s];
    }

    let mut parts = segments(s, separator);
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}

/// Returns the byte offset of the `char_offset`-th character of `s`
///
/// Offsets past the end clamp to `s.len()`, so slicing with the result can
/// never panic or split a code point.
pub(crate) fn byte_offset(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}
