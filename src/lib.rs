//! pathpick - include/exclude glob path selection
//!
//! pathpick decides whether a relative path is selected, given an ordered list
//! of include patterns and an ordered list of exclude patterns.
//!
//! # Selection rules
//!
//! - A path matching any exclude pattern is never selected.
//! - With no include patterns, every path that is not excluded is selected.
//! - Otherwise a path is selected iff it matches at least one include pattern.
//!
//! # Pattern grammar
//!
//! Patterns and paths are split on `/` (and `\`) into segments. Matching is
//! anchored at both ends and case-sensitive unless asked otherwise.
//!
//! - `**` as a whole segment matches zero or more path segments
//! - `*` matches any run of characters within one segment
//! - `?` matches exactly one character within one segment
//! - everything else is literal; `[`, `]`, `{` and `}` are rejected
//!
//! # Example Usage
//!
//! ```rust
//! use pathpick::PatternMatcher;
//!
//! let pick = PatternMatcher::new(["**/*.py", "**/*.md"], ["**/test_*.py", "**/temp/*"])?;
//!
//! assert!(pick.is_selected("file.py"));
//! assert!(pick.is_selected("docs/file.md"));
//! assert!(!pick.is_selected("test_file.py"));
//! assert!(!pick.is_selected("folder/temp/file.md"));
//! # Ok::<(), pathpick::PatternError>(())
//! ```
//!
//! The [`scan`] and [`export`] modules build on the matcher to walk a project
//! tree and write the selected files into a single knowledge-base document.

pub mod cli;
pub mod config;
pub mod core;
pub mod export;
pub mod matcher;
pub mod pattern;
pub mod scan;

// Re-export commonly used types
pub use crate::core::{
    error::{PathPickError, PatternError, Result},
    paths::ProjectPaths,
};

pub use config::PickConfig;

pub use matcher::{PathPick, PatternMatcher, PatternSet, Selection};

pub use pattern::{Pattern, PatternCache};

/// Current version of pathpick
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
