//! Shared compilation cache for patterns
//!
//! Compiled patterns are immutable, so matchers built from the same sources
//! can share one `Arc<Pattern>`. Only successful compilations are stored.

use super::Pattern;
use crate::core::error::PatternError;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::sync::Arc;

static GLOBAL_CACHE: Lazy<PatternCache> = Lazy::new(PatternCache::new);

/// Concurrent map from `(source, case_sensitive)` to compiled pattern
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: DashMap<(String, bool), Arc<Pattern>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache
    pub fn global() -> &'static PatternCache {
        &GLOBAL_CACHE
    }

    /// Return the cached pattern for `source`, compiling it on first use
    pub fn get_or_compile(
        &self,
        source: &str,
        case_sensitive: bool,
    ) -> Result<Arc<Pattern>, PatternError> {
        let key = (source.to_string(), case_sensitive);
        if let Some(pattern) = self.patterns.get(&key) {
            return Ok(Arc::clone(pattern.value()));
        }

        let compiled = Arc::new(Pattern::with_case(source, case_sensitive)?);
        // Another thread may have won the race; either copy is equivalent.
        let entry = self.patterns.entry(key).or_insert(compiled);
        Ok(Arc::clone(entry.value()))
    }

    /// Number of cached patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Drop every cached pattern
    pub fn clear(&self) {
        self.patterns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_cache_shares_compiled_patterns() {
        let cache = PatternCache::new();
        let first = cache.get_or_compile("**/*.rs", true).unwrap();
        let second = cache.get_or_compile("**/*.rs", true).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        // case handling is part of the key
        let folded = cache.get_or_compile("**/*.rs", false).unwrap();
        assert!(!Arc::ptr_eq(&first, &folded));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_does_not_store_errors() {
        let cache = PatternCache::new();
        assert!(cache.get_or_compile("src/[ab].rs", true).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_concurrent_access() {
        let cache = Arc::new(PatternCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let source = format!("dir{}/**/*.py", i % 2);
                    let pattern = cache.get_or_compile(&source, true).unwrap();
                    pattern.matches(&format!("dir{}/a/b.py", i % 2))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(cache.len(), 2);
    }
}
