//! Glob matching inside a single segment
//!
//! `?` matches one character, `*` matches any run of characters and an
//! embedded `{name}` captures the run it covers. Matching never crosses a
//! segment boundary; the caller splits paths first.

use super::pattern::parse_param_with_constraint;
use crate::VariableConstraint;

/// One unit of a glob segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobToken {
    /// Literal character
    Char(char),
    /// `?`
    AnyChar,
    /// `*` (consecutive stars collapse into one)
    AnyRun,
    /// `{name}` or `{name:constraint}` inside a larger segment
    Variable(String, Option<VariableConstraint>),
}

/// Captures produced by a segment match, in pattern order
pub type SegmentCaptures = Vec<(String, String)>;

/// Splits a segment into glob tokens
///
/// A `{` with no closing `}` after it is taken literally.
///
/// # Examples
///
/// ```
/// use antpath_router::route::glob::{tokenize, GlobToken};
///
/// let tokens = tokenize("a?*");
/// assert_eq!(tokens, vec![GlobToken::Char('a'), GlobToken::AnyChar, GlobToken::AnyRun]);
/// ```
pub fn tokenize(segment: &str) -> Vec<GlobToken> {
    let mut tokens = Vec::new();
    let mut rest = segment;

    while let Some(c) = rest.chars().next() {
        match c {
            '?' => {
                tokens.push(GlobToken::AnyChar);
                rest = &rest[1..];
            }
            '*' => {
                if tokens.last() != Some(&GlobToken::AnyRun) {
                    tokens.push(GlobToken::AnyRun);
                }
                rest = &rest[1..];
            }
            '{' => match rest.find('}') {
                Some(close) => {
                    let (name, constraint) = parse_param_with_constraint(&rest[1..close]);
                    tokens.push(GlobToken::Variable(name, constraint));
                    rest = &rest[close + 1..];
                }
                None => {
                    tokens.push(GlobToken::Char('{'));
                    rest = &rest[1..];
                }
            },
            _ => {
                tokens.push(GlobToken::Char(c));
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    tokens
}

/// Matches a tokenized segment against one path segment
///
/// Returns the embedded variable captures on success. `*` and variables are
/// greedy and backtrack when the rest of the segment fails.
///
/// # Examples
///
/// ```
/// use antpath_router::route::glob::{match_glob, tokenize};
///
/// let tokens = tokenize("{artifact}-{version}.jar");
/// let captures = match_glob(&tokens, "foo-1.0.jar").unwrap();
/// assert_eq!(captures[0], ("artifact".to_string(), "foo".to_string()));
/// assert_eq!(captures[1], ("version".to_string(), "1.0".to_string()));
///
/// assert!(match_glob(&tokenize("*.jar"), "foo.pom").is_none());
/// ```
pub fn match_glob(tokens: &[GlobToken], text: &str) -> Option<SegmentCaptures> {
    let chars: Vec<char> = text.chars().collect();
    let mut state = GlobState {
        tokens,
        text: &chars,
        captures: SegmentCaptures::new(),
        failed: vec![false; (tokens.len() + 1) * (chars.len() + 1)],
    };

    if state.match_from(0, 0) {
        Some(state.captures)
    } else {
        None
    }
}

/// Backtracking state for one segment
///
/// Whether the tokens from `ti` match the text from `xi` does not depend on
/// the captures collected so far, so a failed `(ti, xi)` pair is recorded and
/// never explored twice. That bounds the work by tokens times text length
/// squared no matter how many stars a segment carries.
struct GlobState<'a> {
    tokens: &'a [GlobToken],
    text: &'a [char],
    captures: SegmentCaptures,
    failed: Vec<bool>,
}

impl GlobState<'_> {
    fn match_from(&mut self, ti: usize, xi: usize) -> bool {
        let slot = ti * (self.text.len() + 1) + xi;
        if self.failed[slot] {
            return false;
        }

        let matched = self.step(ti, xi);
        if !matched {
            self.failed[slot] = true;
        }
        matched
    }

    fn step(&mut self, ti: usize, xi: usize) -> bool {
        let tokens = self.tokens;
        let Some(token) = tokens.get(ti) else {
            return xi == self.text.len();
        };
        let remaining = self.text.len() - xi;

        match token {
            GlobToken::Char(c) => self.text.get(xi) == Some(c) && self.match_from(ti + 1, xi + 1),
            GlobToken::AnyChar => remaining > 0 && self.match_from(ti + 1, xi + 1),
            GlobToken::AnyRun => (0..=remaining)
                .rev()
                .any(|taken| self.match_from(ti + 1, xi + taken)),
            GlobToken::Variable(name, constraint) => {
                let min = constraint.as_ref().map_or(0, VariableConstraint::min_len);
                for taken in (min..=remaining).rev() {
                    let value = self.text[xi..xi + taken].iter().collect();
                    self.captures.push((name.clone(), value));
                    if self.match_from(ti + 1, xi + taken) {
                        return true;
                    }
                    self.captures.pop();
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, text: &str) -> bool {
        match_glob(&tokenize(pattern), text).is_some()
    }

    #[test]
    fn test_tokenize_collapses_stars() {
        assert_eq!(tokenize("a**b"), vec![
            GlobToken::Char('a'),
            GlobToken::AnyRun,
            GlobToken::Char('b'),
        ]);
    }

    #[test]
    fn test_tokenize_unclosed_brace() {
        assert_eq!(tokenize("{a*"), vec![
            GlobToken::Char('{'),
            GlobToken::Char('a'),
            GlobToken::AnyRun,
        ]);
    }

    #[test]
    fn test_question_mark() {
        assert!(matches("t?st", "test"));
        assert!(!matches("t?st", "tst"));
        assert!(!matches("t?st", "teest"));
    }

    #[test]
    fn test_star() {
        assert!(matches("*", ""));
        assert!(matches("*.xml", "maven-metadata.xml"));
        assert!(matches("foo*bar", "foobar"));
        assert!(matches("foo*bar", "foo-x-bar"));
        assert!(!matches("*.xml", "maven-metadata.xml.sha1"));
    }

    #[test]
    fn test_embedded_variable() {
        let captures = match_glob(&tokenize("{name}.xml"), "pom.xml").unwrap();
        assert_eq!(captures, vec![("name".to_string(), "pom".to_string())]);
    }

    #[test]
    fn test_embedded_non_empty_variable() {
        assert!(match_glob(&tokenize("{name:.+}.xml"), ".xml").is_none());
        let captures = match_glob(&tokenize("{name:.+}.xml"), "a.xml").unwrap();
        assert_eq!(captures, vec![("name".to_string(), "a".to_string())]);
    }

    #[test]
    fn test_greedy_backtracking() {
        let captures = match_glob(&tokenize("{a}.{b}"), "x.y.z").unwrap();
        assert_eq!(captures, vec![
            ("a".to_string(), "x.y".to_string()),
            ("b".to_string(), "z".to_string()),
        ]);
    }

    #[test]
    fn test_many_stars_against_long_text() {
        let text = "a".repeat(200);
        assert!(!matches("*a*a*a*a*a*a*a*b", &text));
        assert!(matches("*a*a*a*a*a*a*a*", &text));
    }

    #[test]
    fn test_many_variables_against_long_text() {
        let text = format!("{}c", "ab".repeat(100));
        assert!(match_glob(&tokenize("{a}b{b}b{c}b{d}b{e}x"), &text).is_none());

        let captures = match_glob(&tokenize("{a}b{b}c"), &text).unwrap();
        assert_eq!(captures[1], ("b".to_string(), String::new()));
    }

    #[test]
    fn test_multibyte() {
        assert!(matches("?", "ä"));
        assert!(matches("caf?", "café"));
    }
}
