/// Constraint attached to a `{name:constraint}` placeholder
///
/// Only the `.+` idiom carries meaning: the captured value must be
/// non-empty. Every other constraint text is kept for display but does not
/// restrict the capture.
///
/// # Examples
///
/// ```
/// use antpath_router::VariableConstraint;
///
/// let constraint = VariableConstraint::from_str(".+");
/// assert_eq!(constraint, VariableConstraint::NonEmpty);
/// assert!(!constraint.validate(""));
/// assert!(constraint.validate("foo"));
///
/// let other = VariableConstraint::from_str("[a-z]+");
/// assert!(other.validate(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableConstraint {
    /// `.+` - at least one character
    NonEmpty,
    /// Any other constraint text, accepted without restriction
    Unchecked(String),
}

impl VariableConstraint {
    /// Parses constraint text from a placeholder
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s {
            ".+" => VariableConstraint::NonEmpty,
            other => VariableConstraint::Unchecked(other.to_string()),
        }
    }

    /// Smallest number of characters a capture needs
    pub fn min_len(&self) -> usize {
        match self {
            VariableConstraint::NonEmpty => 1,
            VariableConstraint::Unchecked(_) => 0,
        }
    }

    /// Checks a captured value against this constraint
    pub fn validate(&self, value: &str) -> bool {
        value.chars().count() >= self.min_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        let c = VariableConstraint::from_str(".+");
        assert_eq!(c.min_len(), 1);
        assert!(c.validate("a"));
        assert!(!c.validate(""));
    }

    #[test]
    fn test_unchecked_keeps_text() {
        let c = VariableConstraint::from_str("\\d+");
        assert_eq!(c, VariableConstraint::Unchecked("\\d+".to_string()));
        assert!(c.validate(""));
        assert!(c.validate("abc"));
    }
}
