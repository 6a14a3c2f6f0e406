//! Glob patterns
//!
//! A [`Pattern`] is compiled once from its source text and then matched
//! against relative paths. Both sides are viewed as `/`-separated segment
//! lists and the match is anchored at both ends: the whole pattern has to
//! consume the whole path.

pub mod cache;
mod parser;
mod segment;

use crate::core::error::PatternError;
use segment::{match_segments, Segment};
use std::fmt;

pub use cache::PatternCache;

/// A compiled glob pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
    case_sensitive: bool,
}

impl Pattern {
    /// Compile a case-sensitive pattern
    pub fn new(source: &str) -> Result<Self, PatternError> {
        Self::with_case(source, true)
    }

    /// Compile a pattern with explicit case handling
    pub fn with_case(source: &str, case_sensitive: bool) -> Result<Self, PatternError> {
        Ok(Self {
            source: source.to_string(),
            segments: parser::parse(source)?,
            case_sensitive,
        })
    }

    /// The source text this pattern was compiled from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether the pattern is nothing but `**` (or empty), i.e. matches the
    /// empty path
    pub fn matches_empty(&self) -> bool {
        self.segments.iter().all(|segment| *segment == Segment::Recursive)
    }

    /// Match a path string. The path is normalized first, see [`split_path`].
    pub fn matches(&self, path: &str) -> bool {
        self.matches_segments(&split_path(path))
    }

    /// Match an already split path
    pub fn matches_segments(&self, path: &[&str]) -> bool {
        match_segments(&self.segments, path, self.case_sensitive)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Split a path into segments.
///
/// `/` and `\` both separate. Leading separators, empty segments and `.`
/// segments are dropped, so `/a//./b` and `a\b` both become `["a", "b"]`.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(parser::is_separator)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("**/*.py", "file.py", true)]
    #[case("**/*.py", "a/file.py", true)]
    #[case("**/*.py", "a/b/file.py", true)]
    #[case("**/*.py", "a/b/file.pyc", false)]
    #[case("folder/*.py", "folder/file.py", true)]
    #[case("folder/*.py", "folder/sub/file.py", false)]
    #[case("*.py", "folder/file.py", false)]
    #[case("**/temp/*", "temp/file.py", true)]
    #[case("**/temp/*", "folder/temp/file.md", true)]
    #[case("**/temp/*", "folder/temp/deep/file.md", false)]
    #[case("pkg/tests/**", "pkg/tests", true)]
    #[case("pkg/tests/**", "pkg/tests/a/b.py", true)]
    #[case("pkg/tests/**", "pkg/testsuite/a.py", false)]
    #[case("bin/**/*.rst", "bin/doc.rst", true)]
    #[case("bin/**/*.rst", "bin/x/y/doc.rst", true)]
    #[case("docs/source/**/index.rst", "docs/source/index.rst", true)]
    #[case("README.rst", "README.rst", true)]
    #[case("README.rst", "docs/README.rst", false)]
    #[case("tests/all.py", "tests/all.py", true)]
    #[case("a/**/b/**/c", "a/x/b/y/z/c", true)]
    #[case("a/**/b/**/c", "a/c", false)]
    #[case("???.md", "abc.md", true)]
    #[case("???.md", "ab.md", false)]
    #[case("*", ".hidden", true)]
    fn test_pattern_matching(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
        let compiled = Pattern::new(pattern).unwrap();
        assert_eq!(
            compiled.matches(path),
            expected,
            "pattern {:?} against {:?}",
            pattern,
            path
        );
    }

    #[test]
    fn test_path_normalization() {
        let pattern = Pattern::new("src/*.rs").unwrap();
        assert!(pattern.matches("/src/lib.rs"));
        assert!(pattern.matches("src\\lib.rs"));
        assert!(pattern.matches("./src//lib.rs"));
        assert!(pattern.matches("src/lib.rs/"));
    }

    #[test]
    fn test_empty_path() {
        assert!(Pattern::new("").unwrap().matches(""));
        assert!(Pattern::new("**").unwrap().matches(""));
        assert!(Pattern::new("**/**").unwrap().matches(""));
        assert!(!Pattern::new("*").unwrap().matches(""));
        assert!(!Pattern::new("**/*").unwrap().matches(""));
        assert!(!Pattern::new("a").unwrap().matches(""));

        assert!(Pattern::new("**").unwrap().matches_empty());
        assert!(!Pattern::new("**/a").unwrap().matches_empty());
    }

    #[test]
    fn test_case_insensitive_opt_in() {
        let sensitive = Pattern::new("Docs/*.MD").unwrap();
        let insensitive = Pattern::with_case("Docs/*.MD", false).unwrap();

        assert!(sensitive.is_case_sensitive());
        assert!(!sensitive.matches("docs/readme.md"));
        assert!(insensitive.matches("docs/readme.md"));
        assert!(insensitive.matches("DOCS/README.MD"));
    }

    #[test]
    fn test_repeated_recursive_wildcards_on_deep_path() {
        let pattern = Pattern::new("**/a/**/a/**/a/**/a/**/a/**/a/**/a/**/b").unwrap();
        let deep = vec!["a"; 40].join("/");

        let start = std::time::Instant::now();
        assert!(!pattern.matches(&deep));
        assert!(pattern.matches(&format!("{}/b", deep)));
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_case_folding_same_for_literal_and_wildcard() {
        let literal = Pattern::with_case("\u{130}", false).unwrap();
        let wildcard = Pattern::with_case("\u{130}*", false).unwrap();

        assert_eq!(literal.matches("i\u{307}"), wildcard.matches("i\u{307}"));
        assert!(!literal.matches("i\u{307}"));
        assert!(literal.matches("\u{130}"));
    }

    #[test]
    fn test_display_round_trips_source() {
        let pattern = Pattern::new("**/test_*.py").unwrap();
        assert_eq!(pattern.to_string(), "**/test_*.py");
        assert_eq!(pattern.as_str(), "**/test_*.py");
    }

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/a//./b"), vec!["a", "b"]);
        assert_eq!(split_path("a\\b"), vec!["a", "b"]);
        assert!(split_path("").is_empty());
        assert!(split_path("///").is_empty());
    }
}
