//! Ordered collections of compiled patterns

use crate::core::error::PatternError;
use crate::pattern::{Pattern, PatternCache};
use std::sync::Arc;

/// Patterns matched with "any" semantics
///
/// Declaration order is kept so diagnostics can name the first pattern that
/// matched; it never changes whether the set matches.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Arc<Pattern>>,
}

impl PatternSet {
    /// Compile every source, failing on the first malformed one
    pub fn compile<I, S>(sources: I, case_sensitive: bool) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = sources
            .into_iter()
            .map(|source| Pattern::with_case(source.as_ref(), case_sensitive).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Like [`PatternSet::compile`], sharing compiled patterns through `cache`
    pub fn compile_cached<I, S>(
        sources: I,
        case_sensitive: bool,
        cache: &PatternCache,
    ) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = sources
            .into_iter()
            .map(|source| cache.get_or_compile(source.as_ref(), case_sensitive))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter().map(|pattern| pattern.as_ref())
    }

    /// Source text of every pattern, in declaration order
    pub fn sources(&self) -> Vec<&str> {
        self.iter().map(Pattern::as_str).collect()
    }

    /// True iff at least one pattern matches the split path
    pub fn any_match(&self, path: &[&str]) -> bool {
        self.first_match(path).is_some()
    }

    /// First pattern, in declaration order, matching the split path
    pub fn first_match(&self, path: &[&str]) -> Option<&Pattern> {
        self.iter().find(|pattern| pattern.matches_segments(path))
    }
}
