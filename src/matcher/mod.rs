//! Path selection from include and exclude pattern lists

pub mod pick;
pub mod set;

// Re-export commonly used items
pub use pick::{PatternMatcher, PatternMatcherBuilder, Selection};
pub use set::PatternSet;

/// Name the matcher goes by in the tools built on it
pub type PathPick = PatternMatcher;
