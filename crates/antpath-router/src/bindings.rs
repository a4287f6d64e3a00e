use indexmap::IndexMap;
use serde::Serialize;

/// Ordered mapping from placeholder name to bound value
///
/// Insertion order follows the traversal order of the pattern. Binding a
/// name twice keeps its first position and replaces the value.
///
/// # Examples
///
/// ```
/// use antpath_router::VariableBindings;
///
/// let mut vars = VariableBindings::new();
/// vars.insert("storageId", "storage0");
/// vars.insert("repositoryId", "releases");
///
/// assert_eq!(vars.get("storageId"), Some("storage0"));
/// let names: Vec<&str> = vars.names().collect();
/// assert_eq!(names, vec!["storageId", "repositoryId"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableBindings(IndexMap<String, String>);

impl VariableBindings {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Binds `name` to `value`, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bound names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Moves every binding of `other` into `self`
    pub fn extend(&mut self, other: VariableBindings) {
        self.0.extend(other.0);
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableBindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for VariableBindings {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Result of matching a path against a pattern
///
/// `variables` is always empty when `matched` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Whether the path satisfied the pattern
    pub matched: bool,
    /// Variables bound by the pattern
    pub variables: VariableBindings,
}

impl MatchResult {
    /// A failed match with no bindings
    pub fn no_match() -> Self {
        Self::default()
    }

    /// A successful match carrying `variables`
    pub fn matched(variables: VariableBindings) -> Self {
        Self {
            matched: true,
            variables,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }

    /// Value bound to `name`, if the match bound it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name)
    }
}

impl From<Option<VariableBindings>> for MatchResult {
    fn from(value: Option<VariableBindings>) -> Self {
        value.map(MatchResult::matched).unwrap_or_default()
    }
}
