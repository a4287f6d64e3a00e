//! Route pattern module
//!
//! Contains pure functional components for pattern parsing and segment matching.
//! All modules follow functional programming principles:
//! - Pure functions (same input → same output)
//! - Immutable data structures
//! - Pattern matching for control flow

pub mod glob;
pub mod pattern;

// Re-export commonly used types
pub use glob::{match_glob, tokenize, GlobToken};
pub use pattern::{classify_segment, parse_param_with_constraint, parse_pattern, PatternSegmentType};
