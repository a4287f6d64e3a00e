//! Pattern parsing for Ant-style route segments
//!
//! Pure functional parsing of route patterns into typed segments.
//! All functions are **pure**: same input → same output, no side effects.

use super::glob::{tokenize, GlobToken};
use crate::path::segments;
use crate::VariableConstraint;

/// Represents different types of route pattern segments
///
/// # Examples
///
/// ```
/// use antpath_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// // Literal segment
/// let seg = classify_segment("storage");
/// assert!(matches!(seg, PatternSegmentType::Literal(_)));
///
/// // Placeholder
/// let seg = classify_segment("{storageId}");
/// assert!(matches!(seg, PatternSegmentType::Placeholder(_, None)));
///
/// // Multi-segment wildcard
/// let seg = classify_segment("**");
/// assert!(matches!(seg, PatternSegmentType::AnyPath));
///
/// // Glob within a segment
/// let seg = classify_segment("*.jar");
/// assert!(matches!(seg, PatternSegmentType::Glob(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType {
    /// `**`: zero or more whole path segments
    AnyPath,
    /// Whole-segment placeholder: `{name}` or `{name:constraint}`
    Placeholder(String, Option<VariableConstraint>),
    /// Segment mixing literal text with `?`, `*` or embedded placeholders
    Glob(Vec<GlobToken>),
    /// Plain text compared byte-for-byte
    Literal(String),
}

/// Classifies a segment into a pattern type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Any path**: exactly `**`
/// 2. **Placeholder**: `{name}` or `{name:constraint}` spanning the whole segment
/// 3. **Glob**: contains `?`, `*` or a `{...}` group
/// 4. **Literal**: any other text
pub fn classify_segment(segment: &str) -> PatternSegmentType {
    if segment == "**" {
        return PatternSegmentType::AnyPath;
    }

    if let Some(inner) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        if !inner.contains('{') && !inner.contains('}') {
            let (name, constraint) = parse_param_with_constraint(inner);
            return PatternSegmentType::Placeholder(name, constraint);
        }
    }

    if has_glob_syntax(segment) {
        PatternSegmentType::Glob(tokenize(segment))
    } else {
        PatternSegmentType::Literal(segment.to_string())
    }
}

/// Splits and classifies a whole pattern
///
/// # Examples
///
/// ```
/// use antpath_router::route::pattern::{parse_pattern, PatternSegmentType};
///
/// let segs = parse_pattern("/storage/{storageId}/**", '/');
/// assert_eq!(segs.len(), 4);
/// assert_eq!(segs[0], PatternSegmentType::Literal(String::new()));
/// assert_eq!(segs[3], PatternSegmentType::AnyPath);
/// ```
pub fn parse_pattern(pattern: &str, separator: char) -> Vec<PatternSegmentType> {
    segments(pattern, separator)
        .into_iter()
        .map(classify_segment)
        .collect()
}

/// Parses parameter name and optional constraint (pure function)
///
/// Maps "name" or "name:constraint" → (name, Option<Constraint>).
/// Only the first colon separates the name from the constraint.
///
/// # Examples
///
/// ```
/// use antpath_router::route::pattern::parse_param_with_constraint;
/// use antpath_router::VariableConstraint;
///
/// let (name, constraint) = parse_param_with_constraint("storageId");
/// assert_eq!(name, "storageId");
/// assert_eq!(constraint, None);
///
/// let (name, constraint) = parse_param_with_constraint("path:.+");
/// assert_eq!(name, "path");
/// assert_eq!(constraint, Some(VariableConstraint::NonEmpty));
/// ```
pub fn parse_param_with_constraint(param: &str) -> (String, Option<VariableConstraint>) {
    param
        .split_once(':')
        .map(|(name, constraint_str)| {
            (
                name.to_string(),
                Some(VariableConstraint::from_str(constraint_str)),
            )
        })
        .unwrap_or_else(|| (param.to_string(), None))
}

/// Whether a segment or full pattern carries any matching syntax
///
/// `*` and `?` always count; braces count only as an opening `{` followed
/// later by a closing `}`.
pub fn has_glob_syntax(s: &str) -> bool {
    if s.contains('*') || s.contains('?') {
        return true;
    }
    s.find('{')
        .map(|open| s[open..].contains('}'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_literal() {
        let seg = classify_segment("metadata");
        assert_eq!(seg, PatternSegmentType::Literal("metadata".to_string()));
    }

    #[test]
    fn test_classify_empty_literal() {
        assert_eq!(classify_segment(""), PatternSegmentType::Literal(String::new()));
    }

    #[test]
    fn test_classify_any_path() {
        assert_eq!(classify_segment("**"), PatternSegmentType::AnyPath);
    }

    #[test]
    fn test_classify_placeholder() {
        let seg = classify_segment("{repositoryId}");
        assert_eq!(
            seg,
            PatternSegmentType::Placeholder("repositoryId".to_string(), None)
        );
    }

    #[test]
    fn test_classify_placeholder_with_constraint() {
        let seg = classify_segment("{path:.+}");
        assert_eq!(
            seg,
            PatternSegmentType::Placeholder("path".to_string(), Some(VariableConstraint::NonEmpty))
        );
    }

    #[test]
    fn test_classify_empty_name_placeholder() {
        let seg = classify_segment("{:.+}");
        assert_eq!(
            seg,
            PatternSegmentType::Placeholder(String::new(), Some(VariableConstraint::NonEmpty))
        );
    }

    #[test]
    fn test_classify_glob() {
        assert!(matches!(classify_segment("*.xml"), PatternSegmentType::Glob(_)));
        assert!(matches!(classify_segment("foo?"), PatternSegmentType::Glob(_)));
        assert!(matches!(classify_segment("{path:.+}.xml"), PatternSegmentType::Glob(_)));
        assert!(matches!(classify_segment("a**"), PatternSegmentType::Glob(_)));
    }

    #[test]
    fn test_unbalanced_brace_is_literal() {
        assert_eq!(classify_segment("{abc"), PatternSegmentType::Literal("{abc".to_string()));
        assert_eq!(classify_segment("abc}"), PatternSegmentType::Literal("abc}".to_string()));
    }

    #[test]
    fn test_parse_param_multiple_colons() {
        let (name, constraint) = parse_param_with_constraint("id:a:b");
        assert_eq!(name, "id");
        assert_eq!(constraint, Some(VariableConstraint::Unchecked("a:b".to_string())));
    }

    #[test]
    fn test_has_glob_syntax() {
        assert!(has_glob_syntax("/a/*"));
        assert!(has_glob_syntax("/a/{b}"));
        assert!(!has_glob_syntax("/a/b"));
        assert!(!has_glob_syntax("/a/}{"));
    }
}
