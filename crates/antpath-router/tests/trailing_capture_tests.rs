//! Tests for the trailing-capture decorator over arbitrary matchers

use antpath_router::*;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Records the patterns it is asked to match, then delegates
#[derive(Default)]
struct RecordingMatcher {
    inner: AntPathMatcher,
    calls: AtomicUsize,
    last_pattern: std::sync::Mutex<Option<String>>,
}

impl PathMatcher for RecordingMatcher {
    fn separator(&self) -> char {
        self.inner.separator()
    }

    fn do_match(&self, pattern: &str, path: &str, full_match: bool) -> Option<VariableBindings> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_pattern.lock().unwrap() = Some(pattern.to_string());
        self.inner.do_match(pattern, path, full_match)
    }
}

#[test]
fn test_inner_matcher_sees_rewritten_pattern() {
    let matcher = TrailingCaptureMatcher::new(RecordingMatcher::default());
    let vars = matcher
        .do_match("/storage/{storageId}/{path:.+}", "/storage/s0/org/foo", true)
        .unwrap();

    assert_eq!(matcher.inner().calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        matcher.inner().last_pattern.lock().unwrap().as_deref(),
        Some("/storage/{storageId}/**")
    );
    assert_eq!(vars.names().collect::<Vec<_>>(), vec!["storageId", "path"]);
}

#[test]
fn test_inner_matcher_sees_untouched_pattern() {
    let matcher = TrailingCaptureMatcher::new(RecordingMatcher::default());
    assert!(matcher.matches("/x/{:.+}", "/x/y"));
    assert_eq!(
        matcher.inner().last_pattern.lock().unwrap().as_deref(),
        Some("/x/{:.+}")
    );
}

#[test]
fn test_trailing_name_overrides_placeholder_of_same_name() {
    let matcher: TrailingCaptureMatcher = TrailingCaptureMatcher::default();
    let vars = matcher
        .do_match("/{path}/{path:.+}", "/a/b/c", true)
        .unwrap();
    // Rewritten pattern has 3 segments: offset 0 + 1 + 1
    assert_eq!(vars.iter().collect::<Vec<_>>(), vec![("path", "/b/c")]);
}

#[test]
fn test_prefix_mode_capture() {
    let matcher: TrailingCaptureMatcher = TrailingCaptureMatcher::default();
    let vars = matcher
        .do_match("/metadata/{storageId}/{repositoryId}/{path:.+}", "/metadata/storage0", false)
        .unwrap();
    assert_eq!(vars.get("storageId"), Some("storage0"));
    assert!(!vars.contains("repositoryId"));
    // Three path segments against five: offset 0 + 8 + 8
    assert_eq!(vars.get("path"), Some("e0"));
}
