//! Include/exclude path selection
//!
//! Precedence is fixed policy:
//!
//! 1. a path matching any exclude pattern is rejected, whatever the includes say
//! 2. with no include patterns, every path that is not excluded is selected
//! 3. otherwise a path is selected iff it matches an include pattern

use super::set::PatternSet;
use crate::core::error::PatternError;
use crate::pattern::{split_path, PatternCache};
use serde::Serialize;
use std::fmt;

/// Why a path was or was not selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Selection {
    /// Selected. `by` is the include pattern that matched, or `None` when the
    /// include list is empty.
    Selected { by: Option<String> },
    /// Rejected by an exclude pattern
    Excluded { by: String },
    /// Rejected because no include pattern matched
    NotIncluded,
}

impl Selection {
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected { .. })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Selected { by: Some(pattern) } => write!(f, "selected by '{}'", pattern),
            Selection::Selected { by: None } => write!(f, "selected (no include patterns)"),
            Selection::Excluded { by } => write!(f, "excluded by '{}'", by),
            Selection::NotIncluded => write!(f, "not included"),
        }
    }
}

/// Compiled include/exclude matcher
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    includes: PatternSet,
    excludes: PatternSet,
    case_sensitive: bool,
}

impl PatternMatcher {
    /// Compile a case-sensitive matcher
    pub fn new<I, E, S, T>(include: I, exclude: E) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Ok(Self {
            includes: PatternSet::compile(include, true)?,
            excludes: PatternSet::compile(exclude, true)?,
            case_sensitive: true,
        })
    }

    pub fn builder() -> PatternMatcherBuilder {
        PatternMatcherBuilder::default()
    }

    /// Whether `path` is selected. Total and side-effect free.
    pub fn is_selected(&self, path: &str) -> bool {
        let segments = split_path(path);
        if self.excludes.any_match(&segments) {
            return false;
        }
        self.includes.is_empty() || self.includes.any_match(&segments)
    }

    /// Same decision as [`PatternMatcher::is_selected`], with the deciding pattern
    pub fn explain(&self, path: &str) -> Selection {
        let segments = split_path(path);
        if let Some(pattern) = self.excludes.first_match(&segments) {
            return Selection::Excluded {
                by: pattern.as_str().to_string(),
            };
        }
        if self.includes.is_empty() {
            return Selection::Selected { by: None };
        }
        match self.includes.first_match(&segments) {
            Some(pattern) => Selection::Selected {
                by: Some(pattern.as_str().to_string()),
            },
            None => Selection::NotIncluded,
        }
    }

    pub fn includes(&self) -> &PatternSet {
        &self.includes
    }

    pub fn excludes(&self) -> &PatternSet {
        &self.excludes
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

/// Builder for [`PatternMatcher`]
#[derive(Debug, Clone)]
pub struct PatternMatcherBuilder {
    include: Vec<String>,
    exclude: Vec<String>,
    case_sensitive: bool,
    use_global_cache: bool,
}

impl Default for PatternMatcherBuilder {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            case_sensitive: true,
            use_global_cache: false,
        }
    }
}

impl PatternMatcherBuilder {
    /// Append one include pattern
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    /// Append one exclude pattern
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    pub fn includes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Defaults to `true`
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Share compiled patterns through [`PatternCache::global`]
    pub fn use_global_cache(mut self, enabled: bool) -> Self {
        self.use_global_cache = enabled;
        self
    }

    /// Compile every pattern; fails on the first malformed one
    pub fn build(self) -> Result<PatternMatcher, PatternError> {
        let (includes, excludes) = if self.use_global_cache {
            let cache = PatternCache::global();
            (
                PatternSet::compile_cached(&self.include, self.case_sensitive, cache)?,
                PatternSet::compile_cached(&self.exclude, self.case_sensitive, cache)?,
            )
        } else {
            (
                PatternSet::compile(&self.include, self.case_sensitive)?,
                PatternSet::compile(&self.exclude, self.case_sensitive)?,
            )
        };

        Ok(PatternMatcher {
            includes,
            excludes,
            case_sensitive: self.case_sensitive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_include_exclude_interaction() {
        // no include, no exclude: everything
        let pick = PatternMatcher::new(NONE, NONE).unwrap();
        assert!(pick.is_selected("file.txt"));
        assert!(pick.is_selected("folder/file.py"));

        // no include, with exclude: everything not excluded
        let pick = PatternMatcher::new(NONE, ["*.txt"]).unwrap();
        assert!(!pick.is_selected("file.txt"));
        assert!(pick.is_selected("file.py"));

        // include only
        let pick = PatternMatcher::new(["*.py"], NONE).unwrap();
        assert!(!pick.is_selected("file.txt"));
        assert!(pick.is_selected("file.py"));

        // exclude takes precedence
        let pick = PatternMatcher::new(["*.py"], ["test_*.py"]).unwrap();
        assert!(pick.is_selected("file.py"));
        assert!(!pick.is_selected("test_file.py"));

        // overlapping exclude
        let pick = PatternMatcher::new(["**/*.py"], ["folder/*.py"]).unwrap();
        assert!(pick.is_selected("file.py"));
        assert!(!pick.is_selected("folder/file.py"));
        assert!(pick.is_selected("other/file.py"));

        // several of each
        let pick =
            PatternMatcher::new(["**/*.py", "**/*.md"], ["**/test_*.py", "**/temp/*"]).unwrap();
        assert!(pick.is_selected("file.py"));
        assert!(pick.is_selected("docs/file.md"));
        assert!(!pick.is_selected("test_file.py"));
        assert!(!pick.is_selected("temp/file.py"));
        assert!(!pick.is_selected("folder/temp/file.md"));
    }

    #[test]
    fn test_explain() {
        let pick =
            PatternMatcher::new(["**/*.py", "**/*.md"], ["**/test_*.py", "**/temp/*"]).unwrap();

        assert_eq!(
            pick.explain("docs/file.md"),
            Selection::Selected {
                by: Some("**/*.md".to_string())
            }
        );
        assert_eq!(
            pick.explain("folder/temp/file.md"),
            Selection::Excluded {
                by: "**/temp/*".to_string()
            }
        );
        assert_eq!(pick.explain("src/lib.rs"), Selection::NotIncluded);

        let open = PatternMatcher::new(NONE, NONE).unwrap();
        assert_eq!(open.explain("x"), Selection::Selected { by: None });
        assert_eq!(open.explain("x").to_string(), "selected (no include patterns)");
    }

    #[test]
    fn test_empty_path() {
        let pick = PatternMatcher::new(["**"], NONE).unwrap();
        assert!(pick.is_selected(""));

        let pick = PatternMatcher::new(["*.py"], NONE).unwrap();
        assert!(!pick.is_selected(""));

        let pick = PatternMatcher::new(NONE, NONE).unwrap();
        assert!(pick.is_selected(""));
    }

    #[test]
    fn test_absolute_and_relative_paths_agree() {
        let pick = PatternMatcher::new(["src/**/*.rs"], ["src/generated/**"]).unwrap();
        for path in ["src/a/lib.rs", "src/generated/x.rs", "docs/a.rs"] {
            assert_eq!(
                pick.is_selected(path),
                pick.is_selected(&format!("/{}", path)),
                "{}",
                path
            );
        }
    }

    #[test]
    fn test_builder() {
        let pick = PatternMatcher::builder()
            .include("**/*.PY")
            .excludes(["**/TEST_*"])
            .case_sensitive(false)
            .build()
            .unwrap();

        assert!(!pick.is_case_sensitive());
        assert!(pick.is_selected("pkg/Module.py"));
        assert!(!pick.is_selected("pkg/test_module.py"));
        assert_eq!(pick.includes().sources(), vec!["**/*.PY"]);
        assert_eq!(pick.excludes().len(), 1);
    }

    #[test]
    fn test_builder_with_global_cache() {
        let pick = PatternMatcher::builder()
            .includes(["cached/**/*.rs"])
            .use_global_cache(true)
            .build()
            .unwrap();

        assert!(pick.is_selected("cached/a/b.rs"));
        assert!(PatternCache::global().len() >= 1);
    }

    #[test]
    fn test_malformed_pattern_fails_construction() {
        let err = PatternMatcher::new(["*.py"], ["src/[abc]/*"]).unwrap_err();
        assert!(matches!(err, PatternError::UnsupportedSyntax { ch: '[', .. }));

        let err = PatternMatcher::builder().include("a**").build().unwrap_err();
        assert!(matches!(err, PatternError::InvalidRecursiveWildcard { .. }));
    }

    #[test]
    fn test_matcher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternMatcher>();
    }
}
