use thiserror::Error;

/// Errors raised while building a matcher
///
/// Matching itself never fails; these only surface from construction and
/// configuration loading.
#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("Invalid path separator {0:?}: it collides with pattern syntax")]
    InvalidSeparator(char),

    #[error(transparent)]
    Config(anyhow::Error),
}

impl From<anyhow::Error> for MatcherError {
    /// Unwraps errors that started out as a `MatcherError` inside config loading
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<MatcherError>() {
            Ok(err) => err,
            Err(err) => MatcherError::Config(err),
        }
    }
}

/// Characters that carry meaning inside patterns and cannot separate segments
pub(crate) const RESERVED_SEPARATORS: [char; 4] = ['*', '?', '{', '}'];

/// Rejects separators that would make patterns ambiguous
pub(crate) fn validate_separator(separator: char) -> Result<char, MatcherError> {
    if RESERVED_SEPARATORS.contains(&separator) {
        Err(MatcherError::InvalidSeparator(separator))
    } else {
        Ok(separator)
    }
}
