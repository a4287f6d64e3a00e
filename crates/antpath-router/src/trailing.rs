//! Named trailing wildcard: `{name:.+}`
//!
//! A final pattern segment of the exact form `{name:.+}` behaves like `**`
//! and additionally binds `name` to the tail of the path. Detection happens
//! before matching (the segment is rewritten to `**`), binding after.
//!
//! The tail is located by summing segment character lengths, not by
//! rejoining segments. Callers depend on the exact values this produces.

use crate::matcher::{AntPathMatcher, PathMatcher};
use crate::path::{byte_offset, reference_segments};
use crate::VariableBindings;

/// Constraint text that turns a trailing placeholder into a capturing `**`
pub const TRAILING_CAPTURE_CONSTRAINT: &str = ".+";

/// A detected `{name:.+}` tail and the pattern rewritten to use `**`
///
/// # Examples
///
/// ```
/// use antpath_router::TrailingWildcard;
///
/// let trailing = TrailingWildcard::detect("/metadata/{storageId}/{path:.+}", '/').unwrap();
/// assert_eq!(trailing.name(), "path");
/// assert_eq!(trailing.rewritten_pattern(), "/metadata/{storageId}/**");
///
/// // A literal suffix disables the rewrite
/// assert!(TrailingWildcard::detect("/metadata/{path:.+}.xml", '/').is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingWildcard {
    name: String,
    rewritten: String,
}

impl TrailingWildcard {
    /// Looks for `{name:.+}` as the final segment of `pattern`
    ///
    /// The name must be non-empty and contain neither `:` nor `}`; anything
    /// else is left to the ordinary placeholder rules.
    pub fn detect(pattern: &str, separator: char) -> Option<Self> {
        let start = pattern
            .rfind(separator)
            .map(|idx| idx + separator.len_utf8())
            .unwrap_or(0);
        let last = &pattern[start..];

        let name = last
            .strip_prefix('{')?
            .strip_suffix('}')?
            .strip_suffix(TRAILING_CAPTURE_CONSTRAINT)?
            .strip_suffix(':')?;

        if name.is_empty() || name.contains(':') || name.contains('}') {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            rewritten: format!("{}**", &pattern[..start]),
        })
    }

    /// Name of the captured variable
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Original pattern with its last segment replaced by `**`
    pub fn rewritten_pattern(&self) -> &str {
        &self.rewritten
    }

    /// Tail of `path` captured by this wildcard
    pub fn capture(&self, path: &str, separator: char) -> String {
        trailing_value(&self.rewritten, path, separator)
    }
}

/// Computes the captured tail for a rewritten pattern and a matching path
///
/// With `n` segments in the rewritten pattern: a path of exactly `n - 1`
/// segments captures `""`. Otherwise the character lengths of the first `n`
/// path segments are summed and the path from that offset onward is returned.
///
/// # Examples
///
/// ```
/// use antpath_router::trailing::trailing_value;
///
/// let pattern = "/metadata/{storageId}/{repositoryId}/**";
/// assert_eq!(
///     trailing_value(pattern, "/metadata/storage0/releases/org/foo/1.0/foo-1.0.jar", '/'),
///     "/org/foo/1.0/foo-1.0.jar"
/// );
/// assert_eq!(trailing_value(pattern, "/metadata/storage0/releases", '/'), "");
/// ```
pub fn trailing_value(rewritten_pattern: &str, path: &str, separator: char) -> String {
    let pattern_count = reference_segments(rewritten_pattern, separator).len();
    let path_segments = reference_segments(path, separator);

    if path_segments.len() + 1 == pattern_count {
        return String::new();
    }

    let offset: usize = path_segments
        .iter()
        .take(pattern_count)
        .map(|segment| segment.chars().count())
        .sum();

    path[byte_offset(path, offset)..].to_string()
}

/// Detects a trailing wildcard in `pattern` and computes its binding for `path`
///
/// Returns `(name, value)`, or `None` when the pattern has no valid
/// `{name:.+}` tail. Does not check that `path` matches; pair it with a
/// successful match of the rewritten pattern.
pub fn bind_trailing_wildcard(pattern: &str, path: &str, separator: char) -> Option<(String, String)> {
    let trailing = TrailingWildcard::detect(pattern, separator)?;
    let value = trailing.capture(path, separator);
    Some((trailing.name, value))
}

/// Decorates a [`PathMatcher`] with `{name:.+}` support
///
/// Patterns without a trailing wildcard are passed through untouched.
///
/// # Examples
///
/// ```
/// use antpath_router::{PathMatcher, TrailingCaptureMatcher};
///
/// let matcher: TrailingCaptureMatcher = TrailingCaptureMatcher::default();
/// let vars = matcher
///     .do_match("/storage/{storageId}/{path:.+}", "/storage/s0/org/foo", true)
///     .unwrap();
/// assert_eq!(vars.get("storageId"), Some("s0"));
/// assert!(vars.contains("path"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrailingCaptureMatcher<M = AntPathMatcher> {
    inner: M,
}

impl<M: PathMatcher> TrailingCaptureMatcher<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    /// The decorated matcher
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: PathMatcher> PathMatcher for TrailingCaptureMatcher<M> {
    fn separator(&self) -> char {
        self.inner.separator()
    }

    fn do_match(&self, pattern: &str, path: &str, full_match: bool) -> Option<VariableBindings> {
        let separator = self.inner.separator();

        let Some(trailing) = TrailingWildcard::detect(pattern, separator) else {
            return self.inner.do_match(pattern, path, full_match);
        };

        let mut bindings = self
            .inner
            .do_match(trailing.rewritten_pattern(), path, full_match);

        if let Some(bindings) = bindings.as_mut() {
            bindings.insert(trailing.name(), trailing.capture(path, separator));
        }

        tracing::trace!(
            "[do_match] pattern {} path {} full_match {} variables {:?}",
            trailing.rewritten_pattern(),
            path,
            full_match,
            bindings
        );

        bindings
    }
}
