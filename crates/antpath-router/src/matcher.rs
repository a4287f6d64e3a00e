//! Ant-style segment matcher
//!
//! Patterns and paths are split on the separator and walked left to right:
//! literal segments compare exactly, `{name}` binds one segment, glob
//! segments match within one segment and `**` spans any number of segments.

use crate::config::MatcherConfig;
use crate::error::{validate_separator, MatcherError};
use crate::path::{segments, DEFAULT_PATH_SEPARATOR};
use crate::route::glob::match_glob;
use crate::route::pattern::{has_glob_syntax, parse_pattern, PatternSegmentType};
use crate::VariableBindings;

/// Matches concrete paths against route patterns
///
/// Implementations are pure: every call returns fresh bindings and no call
/// observes another.
pub trait PathMatcher: Send + Sync {
    /// Separator between segments
    fn separator(&self) -> char;

    /// Matches `path` against `pattern`
    ///
    /// With `full_match` the whole path must be consumed. Without it the
    /// path only has to be a leading portion of something the pattern could
    /// match. Returns the bound variables on success.
    fn do_match(&self, pattern: &str, path: &str, full_match: bool) -> Option<VariableBindings>;

    /// Full match, discarding bindings
    fn matches(&self, pattern: &str, path: &str) -> bool {
        self.do_match(pattern, path, true).is_some()
    }

    /// Prefix match, discarding bindings
    fn match_start(&self, pattern: &str, path: &str) -> bool {
        self.do_match(pattern, path, false).is_some()
    }

    /// Variables of a full match, or `None` when `path` does not match
    fn extract_uri_template_variables(&self, pattern: &str, path: &str) -> Option<VariableBindings> {
        self.do_match(pattern, path, true)
    }

    /// Whether `s` carries wildcards or placeholders
    fn is_pattern(&self, s: &str) -> bool {
        has_glob_syntax(s)
    }
}

/// Default glob-only matcher
///
/// # Examples
///
/// ```
/// use antpath_router::{AntPathMatcher, PathMatcher};
///
/// let matcher = AntPathMatcher::new();
/// assert!(matcher.matches("/a/*/c", "/a/b/c"));
/// assert!(matcher.matches("/a/**", "/a/b/c/d"));
///
/// let vars = matcher
///     .extract_uri_template_variables("/storage/{storageId}", "/storage/s0")
///     .unwrap();
/// assert_eq!(vars.get("storageId"), Some("s0"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntPathMatcher {
    separator: char,
}

impl AntPathMatcher {
    /// Creates a matcher using `/` as separator
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_PATH_SEPARATOR,
        }
    }

    /// Creates a matcher with a custom separator
    ///
    /// Fails when the separator is one of `*`, `?`, `{` or `}`.
    pub fn with_separator(separator: char) -> Result<Self, MatcherError> {
        Ok(Self {
            separator: validate_separator(separator)?,
        })
    }

    pub fn from_config(config: &MatcherConfig) -> Result<Self, MatcherError> {
        Self::with_separator(config.path_separator)
    }
}

impl Default for AntPathMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PathMatcher for AntPathMatcher {
    fn separator(&self) -> char {
        self.separator
    }

    fn do_match(&self, pattern: &str, path: &str, full_match: bool) -> Option<VariableBindings> {
        let pattern_segments = parse_pattern(pattern, self.separator);
        let path_segments = segments(path, self.separator);
        let mode = if full_match {
            MatchMode::Full
        } else {
            MatchMode::Prefix {
                directory: path_segments.len() > 1 && path_segments.last() == Some(&""),
            }
        };

        let result = match_segments(&pattern_segments, &path_segments, mode, VariableBindings::new());

        tracing::trace!(
            pattern,
            path,
            full_match,
            matched = result.is_some(),
            "ant pattern match"
        );

        result
    }
}

/// How much of the path a match has to consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchMode {
    Full,
    /// `directory` is set when the path ends with a separator
    Prefix { directory: bool },
}

impl MatchMode {
    /// Whether the remaining path counts as used up while pattern segments remain
    ///
    /// In prefix mode the trailing empty segment of a directory path is
    /// only skipped here, so a pattern that ends without a separator still
    /// rejects it.
    fn path_exhausted(self, path: &[&str]) -> bool {
        match self {
            MatchMode::Full => false,
            MatchMode::Prefix { directory } => path.is_empty() || (directory && path == [""]),
        }
    }
}

/// Recursive walk over pattern and path segments
///
/// `**` tries the shortest span first and backtracks, so several `**`
/// segments each consume as little as the remaining pattern allows.
fn match_segments(
    pattern: &[PatternSegmentType],
    path: &[&str],
    mode: MatchMode,
    bindings: VariableBindings,
) -> Option<VariableBindings> {
    // Base case: consumed all pattern segments
    let Some((segment, rest)) = pattern.split_first() else {
        return path.is_empty().then_some(bindings);
    };

    if mode.path_exhausted(path) {
        return Some(bindings);
    }

    match segment {
        PatternSegmentType::AnyPath => (0..=path.len())
            .find_map(|skipped| match_segments(rest, &path[skipped..], mode, bindings.clone())),
        _ => {
            let (current, remaining) = path.split_first()?;
            let bindings = match_single(segment, current, bindings)?;
            match_segments(rest, remaining, mode, bindings)
        }
    }
}

/// Matches one non-`**` pattern segment against one path segment
fn match_single(
    segment: &PatternSegmentType,
    text: &str,
    mut bindings: VariableBindings,
) -> Option<VariableBindings> {
    match segment {
        PatternSegmentType::Literal(literal) => (literal.as_str() == text).then_some(bindings),
        PatternSegmentType::Placeholder(name, constraint) => {
            let valid = constraint
                .as_ref()
                .map(|constraint| constraint.validate(text))
                .unwrap_or(true);
            if !valid {
                return None;
            }
            bindings.insert(name.as_str(), text);
            Some(bindings)
        }
        PatternSegmentType::Glob(tokens) => {
            for (name, value) in match_glob(tokens, text)? {
                bindings.insert(name, value);
            }
            Some(bindings)
        }
        PatternSegmentType::AnyPath => Some(bindings),
    }
}
