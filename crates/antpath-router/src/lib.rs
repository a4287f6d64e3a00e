//! # antpath-router
//!
//! Ant-style path pattern matching for routers, with support for:
//! - Literal segments (`/storage`)
//! - Single-segment globs (`/a/*/c`, `/files/*.jar`, `/t?st`)
//! - Multi-segment wildcards (`/storage/**`)
//! - Named placeholders (`/storage/{storageId}`)
//! - Named trailing wildcards (`/metadata/{path:.+}`)
//!
//! ## Named Trailing Wildcards
//!
//! A last segment written `{name:.+}` matches like `**` and also binds the
//! matched tail of the path to `name`. Anything else shaped like it (an
//! empty name, a literal suffix such as `{name:.+}.xml`, a non-final
//! position) is an ordinary placeholder.
//!
//! ## Functional Approach
//!
//! - **Pure matching**: every call builds its own segments and bindings
//! - **Composition over inheritance**: [`TrailingCaptureMatcher`] decorates
//!   any [`PathMatcher`]
//! - **No errors while matching**: malformed patterns simply fail to match
//!
//! ## Example
//!
//! ```
//! use antpath_router::PathMatchService;
//!
//! let service = PathMatchService::new();
//! let result = service.match_path(
//!     "/metadata/{storageId}/{repositoryId}/{path:.+}",
//!     "/metadata/storage0/releases/org/foo/1.0/foo-1.0.jar",
//!     true,
//! );
//!
//! assert!(result.matched);
//! assert_eq!(result.get("storageId"), Some("storage0"));
//! assert_eq!(result.get("repositoryId"), Some("releases"));
//! assert_eq!(result.get("path"), Some("/org/foo/1.0/foo-1.0.jar"));
//! ```

use std::path::Path;

// ============================================================================
// Module Declarations
// ============================================================================

mod bindings;
pub mod config;
mod constraint;
mod error;
pub mod matcher;
pub mod path;
pub mod route;
pub mod trailing;

pub use bindings::{MatchResult, VariableBindings};
pub use config::{Config, MatcherConfig};
pub use constraint::VariableConstraint;
pub use error::MatcherError;
pub use matcher::{AntPathMatcher, PathMatcher};
pub use path::{reference_segments, segments, DEFAULT_PATH_SEPARATOR};
pub use route::pattern::{classify_segment, parse_param_with_constraint, PatternSegmentType};
pub use trailing::{bind_trailing_wildcard, TrailingCaptureMatcher, TrailingWildcard};

// ============================================================================
// Facade
// ============================================================================

/// Entry point used by routing code
///
/// Wraps the configured matcher stack and turns its output into
/// [`MatchResult`] values. Cheap to share: it holds no mutable state, so one
/// instance can serve any number of threads.
pub struct PathMatchService {
    matcher: Box<dyn PathMatcher>,
}

impl PathMatchService {
    /// Creates a service with `/` as separator and trailing capture enabled
    pub fn new() -> Self {
        Self::with_matcher(TrailingCaptureMatcher::new(AntPathMatcher::new()))
    }

    /// Creates a service around any matcher implementation
    pub fn with_matcher(matcher: impl PathMatcher + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
        }
    }

    /// Creates a service with a custom separator
    pub fn with_separator(separator: char) -> Result<Self, MatcherError> {
        Ok(Self::with_matcher(TrailingCaptureMatcher::new(
            AntPathMatcher::with_separator(separator)?,
        )))
    }

    /// Builds the matcher stack described by `config`
    ///
    /// # Examples
    ///
    /// ```
    /// use antpath_router::{MatcherConfig, PathMatchService};
    ///
    /// let config = MatcherConfig {
    ///     path_separator: '/',
    ///     trailing_capture: false,
    /// };
    /// let service = PathMatchService::from_config(&config).unwrap();
    ///
    /// // Without trailing capture `{path:.+}` is a one-segment placeholder
    /// assert!(!service.match_path("/a/{path:.+}", "/a/b/c", true).matched);
    /// ```
    pub fn from_config(config: &MatcherConfig) -> Result<Self, MatcherError> {
        let base = AntPathMatcher::from_config(config)?;
        let service = if config.trailing_capture {
            Self::with_matcher(TrailingCaptureMatcher::new(base))
        } else {
            Self::with_matcher(base)
        };

        tracing::debug!(
            "Path matcher ready (separator {:?}, trailing capture {})",
            config.path_separator,
            config.trailing_capture
        );
        Ok(service)
    }

    /// Loads a TOML config file and builds the matcher it describes
    ///
    /// A missing or empty file yields the default configuration.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, MatcherError> {
        let config = Config::load(path)?;
        Self::from_config(&config.matcher)
    }

    /// Separator the service splits on
    pub fn separator(&self) -> char {
        self.matcher.separator()
    }

    /// Matches `path` against `pattern`
    ///
    /// `full_match` requires the whole path to be consumed; otherwise the
    /// path only needs to be a leading portion of a possible match. Never
    /// fails: a non-match is `matched == false` with no variables.
    pub fn match_path(&self, pattern: &str, path: &str, full_match: bool) -> MatchResult {
        let result = MatchResult::from(self.matcher.do_match(pattern, path, full_match));

        tracing::trace!(
            pattern,
            path,
            full_match,
            matched = result.matched,
            variables = ?result.variables,
            "match_path"
        );

        result
    }

    /// Full match, discarding bindings
    pub fn matches(&self, pattern: &str, path: &str) -> bool {
        self.matcher.matches(pattern, path)
    }

    /// Prefix match, discarding bindings
    pub fn match_start(&self, pattern: &str, path: &str) -> bool {
        self.matcher.match_start(pattern, path)
    }

    /// Variables of a full match, or `None` when `path` does not match
    pub fn extract_uri_template_variables(&self, pattern: &str, path: &str) -> Option<VariableBindings> {
        self.matcher.extract_uri_template_variables(pattern, path)
    }

    /// Whether `s` carries wildcards or placeholders
    pub fn is_pattern(&self, s: &str) -> bool {
        self.matcher.is_pattern(s)
    }
}

impl Default for PathMatchService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PathMatchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathMatchService")
            .field("separator", &self.separator())
            .finish()
    }
}

/// Matches with the default `/` separator and trailing capture enabled
///
/// # Examples
///
/// ```
/// use antpath_router::match_path;
///
/// let result = match_path("/storage/{storageId}/{repositoryId}", "/storage/s0/releases", true);
/// assert!(result.matched);
/// assert_eq!(result.get("repositoryId"), Some("releases"));
///
/// assert!(!match_path("/a/*/c", "/a/b/d", true).matched);
/// ```
pub fn match_path(pattern: &str, path: &str, full_match: bool) -> MatchResult {
    TrailingCaptureMatcher::new(AntPathMatcher::new())
        .do_match(pattern, path, full_match)
        .into()
}
